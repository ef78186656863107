use askama::Template;

use super::PageContext;
use crate::booking::{Field, FormData, FormErrors, Notice};

/// Inline error text per input, flattened for the template.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FieldMessages {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub preferred_date: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl From<&FormErrors> for FieldMessages {
    fn from(errors: &FormErrors) -> Self {
        Self {
            name: errors.message(Field::Name),
            email: errors.message(Field::Email),
            phone: errors.message(Field::Phone),
            preferred_date: errors.message(Field::PreferredDate),
            message: errors.message(Field::Message),
        }
    }
}

#[derive(Template)]
#[template(path = "book.html")]
pub struct BookTemplate {
    pub ctx: PageContext,
    pub values: FormData,
    pub errors: FieldMessages,
    pub notice: Option<Notice>,
    pub submitting: bool,
    /// Today's date, used as the date picker's `min` hint.
    pub min_date: String,
}

#[derive(Template)]
#[template(path = "book_submitted.html")]
pub struct BookSubmittedTemplate {
    pub ctx: PageContext,
    pub notice: Option<Notice>,
}
