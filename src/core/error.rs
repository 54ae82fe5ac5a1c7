use thiserror::Error;

use crate::shared::types::FieldErrors;

/// Why a submission did not produce an itinerary
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    /// Field-level errors, either from the payload contract or reported by
    /// the remote service. Rendered next to their fields.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Anything else: network failure, malformed response, unstructured
    /// error status. The string is diagnostic detail only.
    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Misuse of the form API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
