use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// A draft message from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Which form field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactField::Name => write!(f, "name"),
            ContactField::Email => write!(f, "email"),
            ContactField::Message => write!(f, "message"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

impl FieldError {
    fn new(field: ContactField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Check every rule and report all failures, in field order.
///
/// The email rule only requires a `\S+@\S+\.\S+` match somewhere in
/// the input; surrounding whitespace does not invalidate it.
pub fn validate(draft: &ContactMessage) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if draft.name.trim().chars().count() < 2 {
        errors.push(FieldError::new(
            ContactField::Name,
            "Please enter at least 2 characters.",
        ));
    }
    if !EMAIL_REGEX.is_match(&draft.email) {
        errors.push(FieldError::new(
            ContactField::Email,
            "Please enter a valid email address.",
        ));
    }
    if draft.message.trim().chars().count() < 10 {
        errors.push(FieldError::new(
            ContactField::Message,
            "Message must be at least 10 characters.",
        ));
    }

    errors
}
