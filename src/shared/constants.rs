/// Smallest party size the form accepts
pub const MIN_ADULTS: i64 = 1;

/// Largest party size the form accepts
pub const MAX_ADULTS: i64 = 20;

/// Party size a fresh form starts with
pub const DEFAULT_ADULTS: i64 = 1;

/// Maximum description length, counted in characters
pub const DESCRIPTION_MAX_CHARS: usize = 300;

// =============================================================================
// REMOTE SERVICE
// =============================================================================

/// Environment variable overriding the itinerary service base URL
pub const API_URL_ENV: &str = "ITINERARY_API_URL";

/// Base URL used when `ITINERARY_API_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Path of the itinerary creation endpoint, relative to the base URL
pub const ITINERARY_PATH: &str = "/itinerary";

// =============================================================================
// USER-FACING MESSAGES
// =============================================================================

/// Banner text shown for any failure that is not tied to a field
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to create itinerary. Please try again.";

pub const MSG_DESTINATION_REQUIRED: &str = "Destination is required";
pub const MSG_ORIGIN_REQUIRED: &str = "Origin is required";
pub const MSG_START_DATE_REQUIRED: &str = "Start date is required";
pub const MSG_START_DATE_INVALID: &str = "Start date must be a valid date";
pub const MSG_END_DATE_REQUIRED: &str = "End date is required";
pub const MSG_END_DATE_INVALID: &str = "End date must be a valid date";
pub const MSG_MIN_ADULTS: &str = "At least 1 adult required";
pub const MSG_MAX_ADULTS: &str = "Maximum 20 adults allowed";
pub const MSG_DESCRIPTION_TOO_LONG: &str = "Description must not exceed 300 characters";
pub const MSG_END_BEFORE_START: &str = "End date must be after start date";
