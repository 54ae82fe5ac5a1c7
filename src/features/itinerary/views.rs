//! Display models for the trip form
//!
//! Styling is left to the UI layer; these types decide *what* is shown.

use serde::Serialize;
use std::fmt;

use crate::features::itinerary::dtos::{Attraction, Flight, ItineraryResponseDto};
use crate::features::itinerary::services::FormState;
use crate::shared::constants::DESCRIPTION_MAX_CHARS;
use crate::shared::types::FieldErrors;

pub const SUBMIT_LABEL: &str = "Create Itinerary";
pub const SUBMIT_LABEL_PENDING: &str = "Creating...";
pub const SUCCESS_TITLE: &str = "Trip Created!";

/// Everything the form screen needs to render itself
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub increment_enabled: bool,
    pub decrement_enabled: bool,
    /// e.g. "42/300"
    pub character_count: String,
    pub field_errors: FieldErrors,
    /// Single banner for failures not tied to a field
    pub banner: Option<String>,
    pub success: Option<SuccessView>,
}

impl FormView {
    pub fn from_state(state: &FormState) -> Self {
        let pending = state.is_pending();
        Self {
            submit_label: if pending {
                SUBMIT_LABEL_PENDING
            } else {
                SUBMIT_LABEL
            },
            submit_enabled: state.can_submit(),
            increment_enabled: state.can_increment_adults(),
            decrement_enabled: state.can_decrement_adults(),
            character_count: format!(
                "{}/{}",
                state.description_char_count(),
                DESCRIPTION_MAX_CHARS
            ),
            field_errors: state.errors().clone(),
            banner: state.phase().failure().map(|info| info.message.clone()),
            success: state.phase().response().map(SuccessView::from),
        }
    }
}

/// Confirmation plus whatever parts of the trip plan came back
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessView {
    pub title: &'static str,
    pub message: String,
    pub id: String,
    pub summary: Option<String>,
    pub attractions: Vec<AttractionView>,
    pub flights: Vec<FlightView>,
}

impl SuccessView {
    /// True when at least one itinerary section would be shown
    pub fn has_itinerary(&self) -> bool {
        self.summary.is_some() || !self.attractions.is_empty() || !self.flights.is_empty()
    }
}

impl From<&ItineraryResponseDto> for SuccessView {
    fn from(response: &ItineraryResponseDto) -> Self {
        let plan = response.trip_plan.as_ref();
        Self {
            title: SUCCESS_TITLE,
            message: format!(
                "Your itinerary from {} to {} has been created successfully.",
                response.from, response.to
            ),
            id: response.id.clone(),
            summary: plan
                .and_then(|p| p.summary.clone())
                .filter(|s| !s.trim().is_empty()),
            attractions: plan
                .map(|p| {
                    p.attractions
                        .iter()
                        .enumerate()
                        .map(|(i, a)| AttractionView::new(i + 1, a))
                        .collect()
                })
                .unwrap_or_default(),
            flights: plan
                .map(|p| p.flights.iter().map(FlightView::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for SuccessView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.message)?;
        writeln!(f, "ID: {}", self.id)?;

        if let Some(summary) = &self.summary {
            writeln!(f, "\nSummary\n{}", summary)?;
        }

        if !self.attractions.is_empty() {
            writeln!(f, "\nTop Attractions")?;
            for a in &self.attractions {
                writeln!(f, "{}. {}", a.position, a.name)?;
                if let Some(description) = &a.description {
                    writeln!(f, "   {}", description)?;
                }
                if let Some(distance) = &a.distance {
                    writeln!(f, "   {}", distance)?;
                }
                if let Some(address) = &a.address {
                    writeln!(f, "   {}", address)?;
                }
            }
        }

        if !self.flights.is_empty() {
            writeln!(f, "\nFlight Options")?;
            for fl in &self.flights {
                writeln!(f, "{} - {}", fl.airline, fl.price)?;
                write!(f, "   {} | {}", fl.times, fl.duration)?;
                if let Some(stops) = &fl.stops {
                    write!(f, " | {}", stops)?;
                }
                writeln!(f, " | {}", fl.booking_class)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttractionView {
    /// 1-based rank in the list
    pub position: usize,
    pub name: String,
    pub description: Option<String>,
    pub distance: Option<String>,
    pub address: Option<String>,
}

impl AttractionView {
    fn new(position: usize, attraction: &Attraction) -> Self {
        Self {
            position,
            name: attraction.name.clone(),
            description: non_empty(attraction.description.as_deref()),
            distance: attraction.distance_from_center.and_then(distance_label),
            address: non_empty(attraction.address.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightView {
    pub airline: String,
    pub price: String,
    /// "departure → arrival"
    pub times: String,
    pub duration: String,
    pub stops: Option<String>,
    pub booking_class: String,
}

impl From<&Flight> for FlightView {
    fn from(flight: &Flight) -> Self {
        Self {
            airline: flight.airline.clone(),
            price: flight.price.clone(),
            times: format!("{} → {}", flight.departure_time, flight.arrival_time),
            duration: flight.duration.clone(),
            stops: flight.stops.map(stops_label),
            booking_class: flight.booking_class.clone(),
        }
    }
}

/// "Non-stop" or "N stop(s)"
pub fn stops_label(stops: u32) -> String {
    if stops == 0 {
        "Non-stop".to_string()
    } else {
        format!("{} stop(s)", stops)
    }
}

/// Distance line for an attraction; a zero distance is not shown
pub fn distance_label(km: f64) -> Option<String> {
    if km == 0.0 || !km.is_finite() {
        return None;
    }
    Some(format!("{:.1} km from city center", km))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
