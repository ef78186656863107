use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The five booking form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    PreferredDate,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::PreferredDate,
        Field::Message,
    ];

    /// Form input name, also used as the key in rendered error maps.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::PreferredDate => "preferred_date",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown booking field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "preferred_date" | "preferredDate" => Ok(Field::PreferredDate),
            "message" => Ok(Field::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Values entered by the visitor. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::PreferredDate => &self.preferred_date,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::PreferredDate => &mut self.preferred_date,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    TooShort,
    InvalidFormat,
    Missing,
}

/// A rule violation for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Inline message shown next to the offending input.
    pub fn message(&self) -> &'static str {
        match self.field {
            Field::Name => "Name must be at least 2 characters",
            Field::Email => "Enter a valid email address",
            Field::Phone => "Enter a valid phone number",
            Field::PreferredDate => "Select a future date",
            Field::Message => "Message must be at least 10 characters",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors keyed by field. A field that is absent is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldErrorKind>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field, error.kind);
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).map(|kind| FieldError::new(field, *kind))
    }

    /// Inline message for a field, if it has an error.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|e| e.message())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.0.iter().map(|(field, kind)| FieldError::new(*field, *kind))
    }
}

impl FromIterator<FieldError> for FormErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = FormErrors::new();
        for e in iter {
            errors.insert(e);
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// One-shot toast shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn fix_errors() -> Self {
        Self {
            title: "Fix the errors",
            description: "Please check the highlighted fields.",
            kind: NoticeKind::Destructive,
        }
    }

    pub fn request_sent() -> Self {
        Self {
            title: "Appointment Request Sent",
            description: "We'll contact you shortly.",
            kind: NoticeKind::Success,
        }
    }

    pub fn submission_received() -> Self {
        Self {
            title: "Submission received",
            description: "We'll contact you shortly.",
            kind: NoticeKind::Success,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.kind == NoticeKind::Destructive
    }
}
