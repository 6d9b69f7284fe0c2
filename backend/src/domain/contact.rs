//! Contact-form submissions.
//!
//! A [`ContactDraft`] is the validated shape of an incoming submission; the
//! store turns it into a [`Contact`] by assigning an identifier and the
//! `submitted_at` timestamp. Contacts are never updated or deleted.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

/// Rule violations reported for a contact submission.
///
/// The `Display` text is the client-facing message for each rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Name is required."),
            Self::InvalidEmail => write!(f, "A valid email is required."),
            Self::MissingMessage => write!(f, "Message is required."),
        }
    }
}

impl std::error::Error for ContactValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Return `true` when `value` is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

fn trimmed_non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

/// Validated contact submission awaiting persistence.
///
/// ## Invariants
/// - `name` and `message` are trimmed and non-empty.
/// - `email` is trimmed and matches standard email syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    name: String,
    email: String,
    message: String,
}

impl ContactDraft {
    /// Validate raw submission fields.
    ///
    /// Every rule is checked independently; on failure the returned list
    /// holds one entry per violated rule in `name`, `email`, `message` order.
    ///
    /// # Examples
    /// ```
    /// use travel_backend::domain::{ContactDraft, ContactValidationError};
    ///
    /// let errors = ContactDraft::validate(None, None, None).expect_err("all missing");
    /// assert_eq!(
    ///     errors,
    ///     vec![
    ///         ContactValidationError::MissingName,
    ///         ContactValidationError::InvalidEmail,
    ///         ContactValidationError::MissingMessage,
    ///     ]
    /// );
    /// ```
    pub fn validate(
        name: Option<&str>,
        email: Option<&str>,
        message: Option<&str>,
    ) -> Result<Self, Vec<ContactValidationError>> {
        let name = trimmed_non_empty(name);
        let email = email.map(str::trim).filter(|value| is_valid_email(value));
        let message = trimmed_non_empty(message);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name: name.to_owned(),
                email: email.to_owned(),
                message: message.to_owned(),
            }),
            (name, email, message) => {
                let mut errors = Vec::with_capacity(3);
                if name.is_none() {
                    errors.push(ContactValidationError::MissingName);
                }
                if email.is_none() {
                    errors.push(ContactValidationError::InvalidEmail);
                }
                if message.is_none() {
                    errors.push(ContactValidationError::MissingMessage);
                }
                Err(errors)
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Store-assigned contact identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}
