use serde::{Deserialize, Serialize};

use crate::features::itinerary::dtos::ItineraryResponseDto;

/// Failure that is shown as a single banner rather than next to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// User-facing text
    pub message: String,
    /// Original error, kept for diagnostics only
    pub detail: String,
}

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Pending,
    Success(ItineraryResponseDto),
    Failed(ErrorInfo),
}

impl SubmissionPhase {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionPhase::Pending)
    }

    pub fn response(&self) -> Option<&ItineraryResponseDto> {
        match self {
            SubmissionPhase::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ErrorInfo> {
        match self {
            SubmissionPhase::Failed(info) => Some(info),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionPhase::Idle => write!(f, "idle"),
            SubmissionPhase::Pending => write!(f, "pending"),
            SubmissionPhase::Success(_) => write!(f, "success"),
            SubmissionPhase::Failed(_) => write!(f, "failed"),
        }
    }
}
