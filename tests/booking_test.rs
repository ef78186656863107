//! Form state controller tests: field updates, the submit state machine,
//! the masked failure path and reset.

mod common;

use consult_site::booking::{
    BookingForm, Field, FormData, Notice, SubmissionStatus, SubmitOutcome,
};
use common::*;

#[tokio::test]
async fn test_valid_submit_calls_gateway_once() {
    let gateway = FakeGateway::succeeding();
    let mut form = filled_form();

    let outcome = form.submit(&gateway).await;

    assert!(matches!(outcome, SubmitOutcome::Delivered));
    assert_eq!(gateway.calls(), vec![valid_form_data()]);
    assert_eq!(form.status(), SubmissionStatus::Submitted);
    assert!(form.errors().is_empty());
    assert_eq!(form.notice(), Some(&Notice::request_sent()));
}

#[tokio::test]
async fn test_invalid_submit_makes_no_call() {
    // Scenario B
    let gateway = FakeGateway::succeeding();
    let mut form = filled_form();
    form.set_field(Field::Name, "J");

    let outcome = form.submit(&gateway).await;

    match outcome {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.get(Field::Name).is_some());
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(gateway.calls().is_empty());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.notice(), Some(&Notice::fix_errors()));
}

#[tokio::test]
async fn test_gateway_failure_is_masked() {
    // Scenario C
    let gateway = FakeGateway::failing();
    let mut form = filled_form();

    let outcome = form.submit(&gateway).await;

    assert!(matches!(outcome, SubmitOutcome::Masked(_)));
    assert!(outcome.reached_gateway());
    assert_eq!(gateway.calls().len(), 1);
    assert_eq!(form.status(), SubmissionStatus::Submitted);
    assert_eq!(form.notice(), Some(&Notice::submission_received()));
    assert!(!form.notice().expect("notice").is_destructive());
}

#[tokio::test]
async fn test_submit_after_submitted_is_ignored() {
    let gateway = FakeGateway::succeeding();
    let mut form = filled_form();
    let _ = form.submit(&gateway).await;

    let outcome = form.submit(&gateway).await;

    assert!(matches!(outcome, SubmitOutcome::Ignored));
    assert_eq!(gateway.calls().len(), 1);
    assert_eq!(form.status(), SubmissionStatus::Submitted);
}

#[tokio::test]
async fn test_reset_returns_to_empty_idle_form() {
    // Scenario E
    let gateway = FakeGateway::succeeding();
    let mut form = filled_form();
    let _ = form.submit(&gateway).await;

    assert!(form.reset());

    assert_eq!(form.data(), &FormData::default());
    assert!(form.errors().is_empty());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.notice().is_none());
}

#[tokio::test]
async fn test_resubmission_after_reset_is_allowed() {
    let gateway = FakeGateway::succeeding();
    let mut form = filled_form();
    let _ = form.submit(&gateway).await;
    form.reset();

    let data = valid_form_data();
    for field in Field::ALL {
        form.set_field(field, data.get(field));
    }
    let outcome = form.submit(&gateway).await;

    assert!(matches!(outcome, SubmitOutcome::Delivered));
    assert_eq!(gateway.calls().len(), 2);
}

#[tokio::test]
async fn test_set_field_clears_only_that_error() {
    let gateway = FakeGateway::succeeding();
    let mut form = BookingForm::new();
    let _ = form.submit(&gateway).await;
    assert_eq!(form.errors().len(), 5);

    form.set_field(Field::Email, "still-not-valid");

    assert!(form.errors().get(Field::Email).is_none());
    assert_eq!(form.errors().len(), 4);
    for field in [Field::Name, Field::Phone, Field::PreferredDate, Field::Message] {
        assert!(form.errors().get(field).is_some(), "{field} error should remain");
    }
    assert_eq!(form.data().email, "still-not-valid");
}

#[tokio::test]
async fn test_errors_recomputed_on_each_submit() {
    let gateway = FakeGateway::succeeding();
    let mut form = filled_form();
    form.set_field(Field::Name, "J");
    form.set_field(Field::Message, "short");
    let _ = form.submit(&gateway).await;
    assert_eq!(form.errors().len(), 2);

    form.set_field(Field::Name, "Joanna");
    form.set_field(Field::Message, "short again");
    form.set_field(Field::Phone, "12");
    let _ = form.submit(&gateway).await;

    let fields: Vec<Field> = form.errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec![Field::Phone]);
    assert!(gateway.calls().is_empty());
}

#[test]
fn test_set_field_by_name_accepts_camel_case_date() {
    let mut form = BookingForm::new();
    form.set_field_by_name("preferredDate", "2099-01-01").expect("known field");
    assert_eq!(form.data().preferred_date, "2099-01-01");
}
