use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::shared::constants::{
    MIN_ADULTS, MSG_END_BEFORE_START, MSG_MAX_ADULTS, MSG_MIN_ADULTS,
};
use crate::shared::types::FieldErrors;
use crate::shared::validation::{not_blank, to_field_errors};

/// Request body for `POST /itinerary`
///
/// This is the frozen snapshot of a draft that passed form validation.
/// Messages match the form's own (`shared::constants`), so a payload
/// rejected here reads the same as one rejected by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequestDto {
    #[validate(custom(function = "not_blank", message = "Destination is required"))]
    pub to: String,

    #[validate(custom(function = "not_blank", message = "Origin is required"))]
    pub from: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(range(min = 1, max = 20))]
    pub number_of_adults: u32,

    #[validate(length(max = 300, message = "Description must not exceed 300 characters"))]
    pub description: String,
}

impl ItineraryRequestDto {
    /// End date may equal the start date but not precede it
    pub fn validate_date_order(&self) -> Result<(), &'static str> {
        if self.end_date < self.start_date {
            return Err(MSG_END_BEFORE_START);
        }
        Ok(())
    }

    /// Run the field contract and the date ordering check together
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => to_field_errors(&e),
        };
        if errors.contains("numberOfAdults") {
            errors.insert("numberOfAdults", adult_count_message(self.number_of_adults));
        }
        if let Err(message) = self.validate_date_order() {
            errors.insert("endDate", message);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Same wording the form uses for each side of the adult range
fn adult_count_message(count: u32) -> &'static str {
    if i64::from(count) < MIN_ADULTS {
        MSG_MIN_ADULTS
    } else {
        MSG_MAX_ADULTS
    }
}

/// Treat an explicit JSON `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Response body of a created itinerary
///
/// Everything beyond `id`, `to` and `from` is optional; the payload is passed
/// through to the view as-is. Inside the trip plan an explicit `null` reads
/// the same as an absent key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponseDto {
    pub id: String,
    pub to: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_adults: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_plan: Option<TripPlan>,
}

/// Generated itinerary: summary, attractions and flight options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    #[serde(default)]
    pub summary: Option<String>,
    /// In the order the service returned them (closest to center first)
    #[serde(default, deserialize_with = "null_as_default")]
    pub attractions: Vec<Attraction>,
    /// In the order the service returned them (cheapest first)
    #[serde(default, deserialize_with = "null_as_default")]
    pub flights: Vec<Flight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Kilometers from the city center
    #[serde(default)]
    pub distance_from_center: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(default, deserialize_with = "null_as_default")]
    pub airline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrival_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(default)]
    pub stops: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_class: String,
}
