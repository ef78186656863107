use super::gateway::{Gateway, GatewayError};
use super::types::{Field, FormData, FormErrors, Notice, SubmissionStatus, UnknownField};
use super::validate::validate_form;

/// How a `submit()` call resolved.
///
/// The visitor sees `Delivered` and `Masked` identically; callers can still
/// tell them apart.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; no request was made.
    Rejected(FormErrors),
    /// The gateway accepted the booking.
    Delivered,
    /// The gateway failed, but the visitor was shown an acknowledgment anyway.
    Masked(GatewayError),
    /// A submission was already in flight or completed.
    Ignored,
}

impl SubmitOutcome {
    pub fn reached_gateway(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered | SubmitOutcome::Masked(_))
    }
}

/// Result of `begin_submit()`: either the snapshot to hand to the gateway, or a
/// final outcome that needs no gateway call.
#[derive(Debug)]
pub enum SubmitStep {
    Send(FormData),
    Done(SubmitOutcome),
}

/// State of one booking attempt: entered values, inline errors and submission status.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    data: FormData,
    errors: FormErrors,
    status: SubmissionStatus,
    notice: Option<Notice>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Remove the pending notice so it is shown only once.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Overwrite a field and drop its error. Other errors are left alone and
    /// nothing is re-validated until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value.into());
        self.errors.clear_field(field);
    }

    /// `set_field` by input name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Validate and, if clean, move to `Submitting`.
    ///
    /// Returns the data to send. A form that is already submitting or
    /// submitted yields `Done(Ignored)` and is not touched.
    pub fn begin_submit(&mut self) -> SubmitStep {
        if self.status != SubmissionStatus::Idle {
            log::warn!("Ignoring booking submit while {:?}", self.status);
            return SubmitStep::Done(SubmitOutcome::Ignored);
        }

        let errors = validate_form(&self.data);
        if !errors.is_empty() {
            self.errors = errors.clone();
            self.notice = Some(Notice::fix_errors());
            return SubmitStep::Done(SubmitOutcome::Rejected(errors));
        }

        self.errors = FormErrors::new();
        self.status = SubmissionStatus::Submitting;
        SubmitStep::Send(self.data.clone())
    }

    /// Record the gateway result. Success and failure both land in `Submitted`;
    /// failures are logged and acknowledged with a softer notice.
    pub fn complete_submit(&mut self, result: Result<(), GatewayError>) -> SubmitOutcome {
        self.status = SubmissionStatus::Submitted;
        match result {
            Ok(()) => {
                log::info!("Booking request delivered");
                self.notice = Some(Notice::request_sent());
                SubmitOutcome::Delivered
            }
            Err(e) => {
                log::error!("Booking request failed, acknowledging anyway: {e}");
                self.notice = Some(Notice::submission_received());
                SubmitOutcome::Masked(e)
            }
        }
    }

    /// Validate, then call the gateway exactly once if the form is clean.
    pub async fn submit<G: Gateway>(&mut self, gateway: &G) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitStep::Done(outcome) => outcome,
            SubmitStep::Send(data) => {
                let result = gateway.send(&data).await;
                self.complete_submit(result)
            }
        }
    }

    /// Start over after a submission. Returns false, changing nothing, unless
    /// the form is in `Submitted`.
    pub fn reset(&mut self) -> bool {
        if self.status != SubmissionStatus::Submitted {
            return false;
        }
        *self = BookingForm::new();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::types::FieldErrorKind;

    fn filled() -> BookingForm {
        let mut form = BookingForm::new();
        form.set_field(Field::Name, "Jo");
        form.set_field(Field::Email, "jo@x.com");
        form.set_field(Field::Phone, "1234567890");
        form.set_field(Field::PreferredDate, "2099-01-01");
        form.set_field(Field::Message, "Need a consult");
        form
    }

    #[test]
    fn begin_submit_moves_valid_form_to_submitting() {
        let mut form = filled();
        match form.begin_submit() {
            SubmitStep::Send(data) => assert_eq!(&data, form.data()),
            other => panic!("expected Send, got {other:?}"),
        }
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn begin_submit_while_submitting_is_ignored() {
        let mut form = filled();
        let _ = form.begin_submit();
        assert!(matches!(
            form.begin_submit(),
            SubmitStep::Done(SubmitOutcome::Ignored)
        ));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn invalid_form_stays_idle_with_notice() {
        let mut form = filled();
        form.set_field(Field::Name, "J");
        match form.begin_submit() {
            SubmitStep::Done(SubmitOutcome::Rejected(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.get(Field::Name).map(|e| e.kind), Some(FieldErrorKind::TooShort));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.notice().is_some_and(|n| n.is_destructive()));
    }

    #[test]
    fn complete_submit_with_failure_still_reaches_submitted() {
        let mut form = filled();
        let _ = form.begin_submit();
        let outcome = form.complete_submit(Err(GatewayError::Status {
            status: 500,
            body: String::new(),
        }));
        assert!(matches!(outcome, SubmitOutcome::Masked(_)));
        assert_eq!(form.status(), SubmissionStatus::Submitted);
        assert_eq!(form.take_notice(), Some(Notice::submission_received()));
        assert_eq!(form.take_notice(), None);
    }

    #[test]
    fn reset_requires_submitted() {
        let mut form = filled();
        assert!(!form.reset());
        assert_eq!(form.data().name, "Jo");
    }

    #[test]
    fn set_field_by_name_rejects_unknown_field() {
        let mut form = filled();
        let before = form.data().clone();
        assert!(form.set_field_by_name("address", "x").is_err());
        assert_eq!(form.data(), &before);
    }
}
