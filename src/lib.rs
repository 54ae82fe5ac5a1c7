//! Trip itinerary form: draft validation, submission state machine and the
//! HTTP client for the remote itinerary service.
//!
//! ```no_run
//! use itinerary_form::{FormState, ItineraryClient, TripField};
//!
//! # async fn run() -> Result<(), String> {
//! itinerary_form::core::telemetry::init_tracing();
//! let client = ItineraryClient::from_env()?;
//!
//! let mut form = FormState::new();
//! form.update_field(TripField::To, "Paris");
//! form.update_field(TripField::From, "London");
//! form.update_field(TripField::StartDate, "2025-06-01");
//! form.update_field(TripField::EndDate, "2025-06-07");
//! form.increment_adults();
//!
//! let phase = form.submit(&client).await;
//! println!("{}", phase);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::config::ClientConfig;
pub use crate::core::error::{FormError, SubmitError};
pub use crate::features::itinerary::{
    ErrorInfo, FormState, ItineraryApi, ItineraryClient, SubmissionPhase, TripField, TripRequest,
};
pub use crate::shared::types::FieldErrors;
