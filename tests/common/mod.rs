//! Shared fixtures for booking tests.
//!
//! - `valid_form_data()` - a submission that passes every rule
//! - `filled_form()` - a `BookingForm` holding that submission
//! - `FakeGateway` - records each send and succeeds or fails on demand

#![allow(dead_code)]

use std::sync::Mutex;

use consult_site::booking::{BookingForm, Field, FormData, Gateway, GatewayError};

pub const VALID_NAME: &str = "Jo";
pub const VALID_EMAIL: &str = "jo@x.com";
pub const VALID_PHONE: &str = "1234567890";
pub const VALID_DATE: &str = "2099-01-01";
pub const VALID_MESSAGE: &str = "Need a consult";

pub fn valid_form_data() -> FormData {
    FormData {
        name: VALID_NAME.to_string(),
        email: VALID_EMAIL.to_string(),
        phone: VALID_PHONE.to_string(),
        preferred_date: VALID_DATE.to_string(),
        message: VALID_MESSAGE.to_string(),
    }
}

pub fn filled_form() -> BookingForm {
    let data = valid_form_data();
    let mut form = BookingForm::new();
    for field in Field::ALL {
        form.set_field(field, data.get(field));
    }
    form
}

/// Gateway double that never touches the network.
#[derive(Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<FormData>>,
    fail: bool,
}

impl FakeGateway {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<FormData> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl Gateway for FakeGateway {
    async fn send(&self, data: &FormData) -> Result<(), GatewayError> {
        self.calls.lock().expect("calls lock").push(data.clone());
        if self.fail {
            return Err(GatewayError::Status {
                status: 502,
                body: "Bad Gateway".to_string(),
            });
        }
        Ok(())
    }
}

/// Gateway whose call never resolves, like a stalled connection.
#[derive(Default)]
pub struct HangingGateway {
    calls: Mutex<usize>,
}

impl HangingGateway {
    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("calls lock")
    }
}

impl Gateway for HangingGateway {
    async fn send(&self, _data: &FormData) -> Result<(), GatewayError> {
        *self.calls.lock().expect("calls lock") += 1;
        std::future::pending().await
    }
}
