use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::shared::types::FieldErrors;

lazy_static! {
    /// Shape of the value an HTML date input produces
    /// - Valid: "2025-06-01", "1999-12-31"
    /// - Invalid: "2025-6-1", "01/06/2025", "2025-06-01T00:00"
    pub static ref ISO_DATE_REGEX: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();

    /// Leading integer of a numeric input, the part `parseInt` would read
    /// - Matches: "3", " 12 ", "-4", "+7", "5 adults"
    /// - No match: "", "abc", "adults: 5"
    pub static ref LEADING_INT_REGEX: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
}

/// Parse a `YYYY-MM-DD` string into a calendar date
///
/// Returns None for anything that is not a real date in that exact shape,
/// including impossible days such as "2025-02-30".
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if !ISO_DATE_REGEX.is_match(trimmed) {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Coerce free-form numeric input to an integer
///
/// Reads the leading integer and ignores whatever follows it. Input without
/// one, or one too large for `i64`, yields None.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    LEADING_INT_REGEX
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Custom validator: the value must contain something besides whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Convert `snake_case` struct field names to the camelCase wire names
pub fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Flatten `validator` errors into a wire-keyed field error map
///
/// When a field carries several failures the last one is kept.
pub fn to_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        if let Some(err) = errs.last() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            out.insert(snake_to_camel(&field), message);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_regex() {
        assert!(ISO_DATE_REGEX.is_match("2025-06-01"));
        assert!(ISO_DATE_REGEX.is_match("1999-12-31"));
        assert!(!ISO_DATE_REGEX.is_match("2025-6-1"));
        assert!(!ISO_DATE_REGEX.is_match("01/06/2025"));
        assert!(!ISO_DATE_REGEX.is_match("2025-06-01T00:00"));
        assert!(!ISO_DATE_REGEX.is_match(""));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2025-06-01"),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
        assert_eq!(parse_iso_date("2025-02-30"), None); // not a real day
        assert_eq!(parse_iso_date("tomorrow"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("3"), Some(3));
        assert_eq!(parse_leading_int(" 12 "), Some(12));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("5 adults"), Some(5));
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("adults: 5"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), None); // overflow
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Paris").is_ok());
        assert!(not_blank("  Paris ").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t\n").is_err());
    }

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("to"), "to");
        assert_eq!(snake_to_camel("start_date"), "startDate");
        assert_eq!(snake_to_camel("number_of_adults"), "numberOfAdults");
    }

    #[test]
    fn test_to_field_errors_keeps_last_message() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "number_of_adults",
            ValidationError::new("range").with_message("first".into()),
        );
        errors.add(
            "number_of_adults",
            ValidationError::new("range").with_message("second".into()),
        );
        errors.add("end_date", ValidationError::new("order"));

        let mapped = to_field_errors(&errors);
        assert_eq!(mapped.get("numberOfAdults"), Some("second"));
        assert_eq!(mapped.get("endDate"), Some("order"));
    }
}
