use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::booking::{BookingStore, Field, Gateway, SubmissionStatus, SubmitStep};
use crate::errors::{AppError, render, see_other};
use crate::session::{booking_key, csrf};
use crate::templates_structs::{BookSubmittedTemplate, BookTemplate, FieldMessages, PageContext};

#[derive(Deserialize)]
pub struct BookingSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub preferred_date: String,
    #[serde(default)]
    pub message: String,
    pub csrf_token: String,
}

impl BookingSubmission {
    fn into_fields(self) -> [(Field, String); 5] {
        [
            (Field::Name, self.name),
            (Field::Email, self.email),
            (Field::Phone, self.phone),
            (Field::PreferredDate, self.preferred_date),
            (Field::Message, self.message),
        ]
    }
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn form(
    session: Session,
    store: web::Data<BookingStore>,
) -> Result<HttpResponse, AppError> {
    let key = booking_key(&session)?;
    let ctx = PageContext::build(&session, "/book");

    let (status, values, errors, notice) = store.with_form(&key, |booking| {
        (
            booking.status(),
            booking.data().clone(),
            FieldMessages::from(booking.errors()),
            booking.take_notice(),
        )
    });

    if status == SubmissionStatus::Submitted {
        return render(BookSubmittedTemplate { ctx, notice });
    }

    let min_date = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    render(BookTemplate {
        ctx,
        values,
        errors,
        notice,
        submitting: status == SubmissionStatus::Submitting,
        min_date,
    })
}

pub async fn submit<G: Gateway + 'static>(
    session: Session,
    store: web::Data<BookingStore>,
    gateway: web::Data<G>,
    form: web::Form<BookingSubmission>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let key = booking_key(&session)?;

    // Only fields that actually changed go through set_field, so untouched
    // errors survive until validation runs again.
    let fields = form.into_inner().into_fields();
    let step = store.with_form(&key, |booking| {
        if booking.status() == SubmissionStatus::Idle {
            for (field, value) in fields {
                if booking.data().get(field) != value {
                    booking.set_field(field, value);
                }
            }
        }
        booking.begin_submit()
    });

    if let SubmitStep::Send(data) = step {
        // Dropping the request mid-send still settles the form via the guard.
        let pending = store.pending_submit(&key);
        let result = gateway.send(&data).await;
        pending.complete(result);
    }

    Ok(see_other("/book"))
}

pub async fn reset(
    session: Session,
    store: web::Data<BookingStore>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let key = booking_key(&session)?;

    if !store.with_form(&key, |booking| booking.reset()) {
        log::debug!("Ignoring booking reset: no submitted booking for this session");
    }
    Ok(see_other("/book"))
}
