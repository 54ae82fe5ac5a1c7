use std::str::FromStr;

use crate::core::error::{FormError, SubmitError};
use crate::features::itinerary::clients::ItineraryApi;
use crate::features::itinerary::dtos::{ItineraryRequestDto, ItineraryResponseDto};
use crate::features::itinerary::models::{ErrorInfo, SubmissionPhase, TripField, TripRequest};
use crate::shared::constants::{GENERIC_FAILURE_MESSAGE, MAX_ADULTS, MIN_ADULTS};
use crate::shared::types::FieldErrors;

/// Draft, errors and submission phase of one trip form
///
/// All mutation goes through this type. Errors are cleared per field as the
/// user edits and recomputed in full only when a submit is attempted.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    request: TripRequest,
    errors: FieldErrors,
    phase: SubmissionPhase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &TripRequest {
        &self.request
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: TripField) -> Option<&str> {
        self.errors.get(field.as_str())
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase.is_pending()
    }

    /// Whether the submit affordance is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_pending()
    }

    pub fn description_char_count(&self) -> usize {
        self.request.description_char_count()
    }

    /// Back to a fresh session
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Store user input for a field and clear that field's error
    pub fn update_field(&mut self, field: TripField, raw_value: &str) {
        self.request.set(field, raw_value);
        self.errors.remove(field.as_str());
    }

    /// `update_field` keyed by wire name
    pub fn update_field_by_name(&mut self, name: &str, raw_value: &str) -> Result<(), FormError> {
        let field = TripField::from_str(name)?;
        self.update_field(field, raw_value);
        Ok(())
    }

    pub fn can_increment_adults(&self) -> bool {
        !matches!(self.request.number_of_adults, Some(n) if n >= MAX_ADULTS)
    }

    pub fn can_decrement_adults(&self) -> bool {
        matches!(self.request.number_of_adults, Some(n) if n > MIN_ADULTS)
    }

    /// Stepper "+": one more adult, never beyond the maximum
    pub fn increment_adults(&mut self) {
        if !self.can_increment_adults() {
            return;
        }
        let next = match self.request.number_of_adults {
            Some(n) => (n + 1).max(MIN_ADULTS),
            None => MIN_ADULTS,
        };
        self.update_field(TripField::NumberOfAdults, &next.to_string());
    }

    /// Stepper "-": one fewer adult, never below the minimum
    pub fn decrement_adults(&mut self) {
        if !self.can_decrement_adults() {
            return;
        }
        let next = match self.request.number_of_adults {
            Some(n) => (n - 1).min(MAX_ADULTS),
            None => return,
        };
        self.update_field(TripField::NumberOfAdults, &next.to_string());
    }

    // =========================================================================
    // Validation and submission
    // =========================================================================

    /// Validate the whole draft and make the result the current errors
    pub fn validate(&mut self) -> FieldErrors {
        self.errors = self.request.validate();
        self.errors.clone()
    }

    /// Validate, submit and apply the outcome
    ///
    /// No request is sent when the draft is invalid or a submission is
    /// already pending. Returns the phase the form ends up in.
    pub async fn submit<A>(&mut self, api: &A) -> SubmissionPhase
    where
        A: ItineraryApi + ?Sized,
    {
        let Some(payload) = self.begin_submit() else {
            return self.phase.clone();
        };
        // Dropped before the outcome arrives: the guard puts the form back to Idle
        let mut guard = PendingGuard { form: self };
        let outcome = api.create_itinerary(&payload).await;
        guard.form.finish_submit(outcome);
        guard.form.phase.clone()
    }

    /// Abandon a pending submission whose outcome will never be applied
    ///
    /// The draft and errors are kept and submit is enabled again. Returns
    /// false when nothing was pending.
    pub fn cancel_submit(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        tracing::warn!("Pending itinerary submission abandoned");
        self.phase = SubmissionPhase::Idle;
        true
    }

    /// First half of a submit: reset the display, validate, go `Pending`
    ///
    /// Returns the frozen payload to send, or None when nothing should be
    /// sent. The caller owns the in-flight call and must hand its outcome to
    /// `finish_submit`.
    pub fn begin_submit(&mut self) -> Option<ItineraryRequestDto> {
        if self.is_pending() {
            tracing::warn!("Submit ignored: a submission is already pending");
            return None;
        }

        self.phase = SubmissionPhase::Idle;
        self.errors.clear();

        match self.request.freeze() {
            Ok(payload) => {
                self.phase = SubmissionPhase::Pending;
                tracing::debug!(
                    "Submitting itinerary {} -> {} for {} adult(s)",
                    payload.from,
                    payload.to,
                    payload.number_of_adults
                );
                Some(payload)
            }
            Err(errors) => {
                tracing::debug!(
                    "Submit blocked by invalid fields: {:?}",
                    errors.fields().collect::<Vec<_>>()
                );
                self.errors = errors;
                None
            }
        }
    }

    /// Second half of a submit: apply the remote outcome
    ///
    /// Ignored unless a submission is pending, e.g. a late outcome after
    /// `reset` or `cancel_submit`.
    pub fn finish_submit(&mut self, outcome: Result<ItineraryResponseDto, SubmitError>) {
        if !self.is_pending() {
            tracing::warn!("Submission outcome ignored: no submission is pending");
            return;
        }

        match outcome {
            Ok(response) => {
                self.errors.clear();
                self.phase = SubmissionPhase::Success(response);
            }
            Err(SubmitError::Validation(errors)) => {
                self.errors = errors;
                self.phase = SubmissionPhase::Idle;
            }
            Err(SubmitError::Transport(detail)) => {
                tracing::error!("Itinerary submission failed: {}", detail);
                self.phase = SubmissionPhase::Failed(ErrorInfo {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                    detail,
                });
            }
        }
    }
}

/// Holds the form while `submit` awaits the remote call
struct PendingGuard<'a> {
    form: &'a mut FormState,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.form.cancel_submit();
    }
}
