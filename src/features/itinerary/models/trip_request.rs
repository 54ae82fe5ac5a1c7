use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::FormError;
use crate::features::itinerary::dtos::ItineraryRequestDto;
use crate::shared::constants::*;
use crate::shared::types::FieldErrors;
use crate::shared::validation::{parse_iso_date, parse_leading_int};

/// Editable fields of the trip form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TripField {
    To,
    From,
    StartDate,
    EndDate,
    NumberOfAdults,
    Description,
}

impl TripField {
    pub const ALL: [TripField; 6] = [
        TripField::To,
        TripField::From,
        TripField::StartDate,
        TripField::EndDate,
        TripField::NumberOfAdults,
        TripField::Description,
    ];

    /// Wire name, also the key used in `FieldErrors`
    pub fn as_str(&self) -> &'static str {
        match self {
            TripField::To => "to",
            TripField::From => "from",
            TripField::StartDate => "startDate",
            TripField::EndDate => "endDate",
            TripField::NumberOfAdults => "numberOfAdults",
            TripField::Description => "description",
        }
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TripField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// The user's draft trip request
///
/// Text fields hold exactly what was typed. `number_of_adults` is None when
/// the input holds no usable integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub to: String,
    pub from: String,
    pub start_date: String,
    pub end_date: String,
    pub number_of_adults: Option<i64>,
    pub description: String,
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            to: String::new(),
            from: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            number_of_adults: Some(DEFAULT_ADULTS),
            description: String::new(),
        }
    }
}

impl TripRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw input for a field, coercing the adult count to an integer
    pub fn set(&mut self, field: TripField, raw: &str) {
        match field {
            TripField::To => self.to = raw.to_string(),
            TripField::From => self.from = raw.to_string(),
            TripField::StartDate => self.start_date = raw.to_string(),
            TripField::EndDate => self.end_date = raw.to_string(),
            TripField::NumberOfAdults => self.number_of_adults = parse_leading_int(raw),
            TripField::Description => self.description = raw.to_string(),
        }
    }

    /// Current value of a field as the input would display it
    pub fn value(&self, field: TripField) -> String {
        match field {
            TripField::To => self.to.clone(),
            TripField::From => self.from.clone(),
            TripField::StartDate => self.start_date.clone(),
            TripField::EndDate => self.end_date.clone(),
            TripField::NumberOfAdults => self
                .number_of_adults
                .map(|n| n.to_string())
                .unwrap_or_default(),
            TripField::Description => self.description.clone(),
        }
    }

    pub fn description_char_count(&self) -> usize {
        self.description.chars().count()
    }

    /// Check every rule and collect one message per failing field
    pub fn validate(&self) -> FieldErrors {
        self.evaluate().0
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_empty()
    }

    /// Snapshot the draft as a request payload, or return why it can't be
    pub fn freeze(&self) -> Result<ItineraryRequestDto, FieldErrors> {
        match self.evaluate() {
            (errors, Some(payload)) if errors.is_empty() => Ok(payload),
            (errors, _) => Err(errors),
        }
    }

    // Rules run in a fixed order; a later rule for the same field replaces
    // the earlier message.
    fn evaluate(&self) -> (FieldErrors, Option<ItineraryRequestDto>) {
        let mut errors = FieldErrors::new();

        if self.to.trim().is_empty() {
            errors.insert(TripField::To.as_str(), MSG_DESTINATION_REQUIRED);
        }
        if self.from.trim().is_empty() {
            errors.insert(TripField::From.as_str(), MSG_ORIGIN_REQUIRED);
        }

        let start = check_date(
            &mut errors,
            TripField::StartDate,
            &self.start_date,
            MSG_START_DATE_REQUIRED,
            MSG_START_DATE_INVALID,
        );
        let end = check_date(
            &mut errors,
            TripField::EndDate,
            &self.end_date,
            MSG_END_DATE_REQUIRED,
            MSG_END_DATE_INVALID,
        );

        let adults = self.number_of_adults;
        if !matches!(adults, Some(n) if n >= MIN_ADULTS) {
            errors.insert(TripField::NumberOfAdults.as_str(), MSG_MIN_ADULTS);
        }
        if matches!(adults, Some(n) if n > MAX_ADULTS) {
            errors.insert(TripField::NumberOfAdults.as_str(), MSG_MAX_ADULTS);
        }

        if self.description_char_count() > DESCRIPTION_MAX_CHARS {
            errors.insert(TripField::Description.as_str(), MSG_DESCRIPTION_TOO_LONG);
        }

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.insert(TripField::EndDate.as_str(), MSG_END_BEFORE_START);
            }
        }

        let payload = match (start, end, adults.and_then(|n| u32::try_from(n).ok())) {
            (Some(start_date), Some(end_date), Some(number_of_adults)) if errors.is_empty() => {
                Some(ItineraryRequestDto {
                    to: self.to.clone(),
                    from: self.from.clone(),
                    start_date,
                    end_date,
                    number_of_adults,
                    description: self.description.clone(),
                })
            }
            _ => None,
        };

        (errors, payload)
    }
}

fn check_date(
    errors: &mut FieldErrors,
    field: TripField,
    raw: &str,
    required_message: &str,
    invalid_message: &str,
) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        errors.insert(field.as_str(), required_message);
        return None;
    }
    let parsed = parse_iso_date(raw);
    if parsed.is_none() {
        errors.insert(field.as_str(), invalid_message);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::address::en::CityName;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    fn valid_request() -> TripRequest {
        TripRequest {
            to: "Paris".to_string(),
            from: "London".to_string(),
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-07".to_string(),
            number_of_adults: Some(2),
            description: "Museums, food and a day trip to Versailles".to_string(),
        }
    }

    fn fake_valid_request() -> TripRequest {
        let description: String = Sentence(3..10).fake();
        TripRequest {
            to: CityName().fake(),
            from: CityName().fake(),
            start_date: "2025-09-10".to_string(),
            end_date: "2025-09-20".to_string(),
            number_of_adults: Some((1..21).fake::<i64>()),
            description: description.chars().take(DESCRIPTION_MAX_CHARS).collect(),
        }
    }

    // ==================== TripField ====================

    #[test]
    fn test_trip_field_round_trips_wire_names() {
        for field in TripField::ALL {
            assert_eq!(field.as_str().parse::<TripField>(), Ok(field));
            assert_eq!(field.to_string(), field.as_str());
        }
    }

    #[test]
    fn test_trip_field_rejects_unknown_name() {
        assert_eq!(
            "budget".parse::<TripField>(),
            Err(FormError::UnknownField("budget".to_string()))
        );
        // names are case sensitive
        assert!("StartDate".parse::<TripField>().is_err());
    }

    // ==================== set / value ====================

    #[test]
    fn test_default_request() {
        let request = TripRequest::new();
        assert_eq!(request.number_of_adults, Some(1));
        assert!(request.to.is_empty());
        assert!(request.description.is_empty());
    }

    #[test]
    fn test_set_stores_text_verbatim() {
        let mut request = TripRequest::new();
        request.set(TripField::To, "  Paris ");
        request.set(TripField::Description, "Hello");
        assert_eq!(request.to, "  Paris ");
        assert_eq!(request.description, "Hello");
    }

    #[test]
    fn test_set_coerces_adult_count() {
        let mut request = TripRequest::new();

        request.set(TripField::NumberOfAdults, "4");
        assert_eq!(request.number_of_adults, Some(4));

        request.set(TripField::NumberOfAdults, "7 people");
        assert_eq!(request.number_of_adults, Some(7));

        request.set(TripField::NumberOfAdults, "");
        assert_eq!(request.number_of_adults, None);
        assert_eq!(request.value(TripField::NumberOfAdults), "");

        request.set(TripField::NumberOfAdults, "lots");
        assert_eq!(request.number_of_adults, None);
    }

    // ==================== validate ====================

    #[test]
    fn test_valid_request_has_no_errors() {
        let request = valid_request();
        assert!(request.validate().is_empty());
        assert!(request.is_submittable());
    }

    #[test]
    fn test_generated_valid_requests_have_no_errors() {
        for _ in 0..50 {
            let request = fake_valid_request();
            assert!(
                request.validate().is_empty(),
                "unexpected errors for {:?}: {:?}",
                request,
                request.validate()
            );
        }
    }

    #[test]
    fn test_empty_request_reports_every_required_field() {
        let mut request = TripRequest::new();
        request.number_of_adults = None;

        let errors = request.validate();
        assert_eq!(errors.get("to"), Some(MSG_DESTINATION_REQUIRED));
        assert_eq!(errors.get("from"), Some(MSG_ORIGIN_REQUIRED));
        assert_eq!(errors.get("startDate"), Some(MSG_START_DATE_REQUIRED));
        assert_eq!(errors.get("endDate"), Some(MSG_END_DATE_REQUIRED));
        assert_eq!(errors.get("numberOfAdults"), Some(MSG_MIN_ADULTS));
        assert!(!errors.contains("description"));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_single_invalid_field_yields_only_its_error() {
        let cases: Vec<(TripField, &str, &str)> = vec![
            (TripField::To, "   ", MSG_DESTINATION_REQUIRED),
            (TripField::From, "", MSG_ORIGIN_REQUIRED),
            (TripField::StartDate, "", MSG_START_DATE_REQUIRED),
            (TripField::StartDate, "next week", MSG_START_DATE_INVALID),
            (TripField::EndDate, "", MSG_END_DATE_REQUIRED),
            (TripField::EndDate, "2025-13-01", MSG_END_DATE_INVALID),
            (TripField::NumberOfAdults, "0", MSG_MIN_ADULTS),
            (TripField::NumberOfAdults, "", MSG_MIN_ADULTS),
            (TripField::NumberOfAdults, "21", MSG_MAX_ADULTS),
        ];

        for (field, raw, message) in cases {
            let mut request = fake_valid_request();
            request.set(field, raw);

            let errors = request.validate();
            assert_eq!(errors.len(), 1, "{} = {:?} gave {:?}", field, raw, errors);
            assert_eq!(errors.get(field.as_str()), Some(message));
        }

        let mut request = fake_valid_request();
        request.set(TripField::Description, &"a".repeat(301));
        let errors = request.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("description"), Some(MSG_DESCRIPTION_TOO_LONG));
    }

    #[test]
    fn test_adult_count_boundaries() {
        for (count, valid) in [(0, false), (1, true), (20, true), (21, false), (-3, false)] {
            let request = TripRequest {
                number_of_adults: Some(count),
                ..valid_request()
            };
            assert_eq!(request.validate().is_empty(), valid, "count {}", count);
        }
    }

    #[test]
    fn test_description_boundaries() {
        let at_limit = TripRequest {
            description: "x".repeat(300),
            ..valid_request()
        };
        assert!(at_limit.validate().is_empty());

        let over_limit = TripRequest {
            description: "x".repeat(301),
            ..valid_request()
        };
        assert_eq!(
            over_limit.validate().get("description"),
            Some(MSG_DESCRIPTION_TOO_LONG)
        );
    }

    #[test]
    fn test_description_counts_characters_not_bytes() {
        let request = TripRequest {
            description: "é".repeat(300),
            ..valid_request()
        };
        assert_eq!(request.description_char_count(), 300);
        assert!(request.validate().is_empty());
    }

    #[test]
    fn test_date_ordering() {
        let same_day = TripRequest {
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-01".to_string(),
            ..valid_request()
        };
        assert!(same_day.validate().is_empty());

        let day_before = TripRequest {
            start_date: "2025-06-01".to_string(),
            end_date: "2025-05-31".to_string(),
            ..valid_request()
        };
        let errors = day_before.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("endDate"), Some(MSG_END_BEFORE_START));
    }

    #[test]
    fn test_date_ordering_skipped_when_a_date_is_missing() {
        let request = TripRequest {
            start_date: "2025-06-01".to_string(),
            end_date: String::new(),
            ..valid_request()
        };
        assert_eq!(request.validate().get("endDate"), Some(MSG_END_DATE_REQUIRED));
    }

    #[test]
    fn test_independent_errors_reported_together() {
        let request = TripRequest {
            to: String::new(),
            number_of_adults: Some(25),
            description: "y".repeat(400),
            ..valid_request()
        };

        let errors = request.validate();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["description", "numberOfAdults", "to"]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let request = TripRequest {
            from: String::new(),
            end_date: "2025-01-01".to_string(),
            ..valid_request()
        };
        assert_eq!(request.validate(), request.validate());
    }

    // ==================== freeze ====================

    #[test]
    fn test_freeze_builds_payload() {
        let payload = valid_request().freeze().unwrap();
        assert_eq!(payload.to, "Paris");
        assert_eq!(payload.start_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(payload.end_date, NaiveDate::from_ymd_opt(2025, 6, 7).unwrap());
        assert_eq!(payload.number_of_adults, 2);
        assert!(payload.check().is_ok());
    }

    #[test]
    fn test_freeze_refuses_invalid_draft() {
        let request = TripRequest {
            to: String::new(),
            ..valid_request()
        };
        let errors = request.freeze().unwrap_err();
        assert_eq!(errors.get("to"), Some(MSG_DESTINATION_REQUIRED));
    }
}
