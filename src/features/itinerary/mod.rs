pub mod clients;
pub mod dtos;
pub mod models;
pub mod services;
pub mod views;

pub use clients::{ItineraryApi, ItineraryClient};
pub use models::{ErrorInfo, SubmissionPhase, TripField, TripRequest};
pub use services::FormState;
