//! Consultation booking: field rules, the per-visitor form state machine, and
//! delivery to the email service.

pub mod controller;
pub mod gateway;
pub mod store;
pub mod types;
pub mod validate;

pub use controller::{BookingForm, SubmitOutcome, SubmitStep};
pub use gateway::{EmailJsGateway, Gateway, GatewayError};
pub use store::{BookingStore, PendingSubmit};
pub use types::{
    Field, FieldError, FieldErrorKind, FormData, FormErrors, Notice, NoticeKind,
    SubmissionStatus, UnknownField,
};
pub use validate::validate_form;
