use std::sync::LazyLock;

use regex::Regex;

use super::types::{Field, FieldError, FieldErrorKind, FormData, FormErrors};

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// Whitespace is stripped before matching, so only digits, '-' and the leading '+' remain.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s-]{10,}$").expect("phone pattern compiles"));

/// Name: at least 2 characters once surrounding whitespace is removed.
pub fn validate_name(name: &str) -> Option<FieldError> {
    if name.trim().chars().count() < NAME_MIN_CHARS {
        return Some(FieldError::new(Field::Name, FieldErrorKind::TooShort));
    }
    None
}

/// Email: `local@domain.tld` with no whitespace anywhere.
pub fn validate_email(email: &str) -> Option<FieldError> {
    if !EMAIL_RE.is_match(email) {
        return Some(FieldError::new(Field::Email, FieldErrorKind::InvalidFormat));
    }
    None
}

/// Phone: optional leading '+' then 10 or more digits or hyphens, ignoring whitespace.
pub fn validate_phone(phone: &str) -> Option<FieldError> {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !PHONE_RE.is_match(&compact) {
        return Some(FieldError::new(Field::Phone, FieldErrorKind::InvalidFormat));
    }
    None
}

/// Preferred date: presence only, untrimmed. The value is not parsed and may lie in the past.
pub fn validate_preferred_date(date: &str) -> Option<FieldError> {
    if date.is_empty() {
        return Some(FieldError::new(Field::PreferredDate, FieldErrorKind::Missing));
    }
    None
}

/// Message: at least 10 characters once surrounding whitespace is removed.
pub fn validate_message(message: &str) -> Option<FieldError> {
    if message.trim().chars().count() < MESSAGE_MIN_CHARS {
        return Some(FieldError::new(Field::Message, FieldErrorKind::TooShort));
    }
    None
}

/// Check a single field against its rule.
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
        Field::PreferredDate => validate_preferred_date(value),
        Field::Message => validate_message(value),
    }
}

/// Run every rule. The form is valid iff the result is empty.
pub fn validate_form(data: &FormData) -> FormErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, data.get(field)))
        .collect()
}
