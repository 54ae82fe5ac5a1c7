mod submission;
mod trip_request;

pub use submission::{ErrorInfo, SubmissionPhase};
pub use trip_request::{TripField, TripRequest};
