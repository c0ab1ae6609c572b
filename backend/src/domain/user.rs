//! User data model.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RecordId;

/// Validation errors returned by [`EmailAddress::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The email was empty once trimmed of whitespace.
    EmptyEmail,
    /// The email does not match the accepted address shape.
    InvalidEmail,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
        }
    }
}

impl std::error::Error for UserValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only: one @, non-empty local part, dotted domain.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validated email address.
///
/// Uniqueness comparisons are ASCII case-insensitive, matching how the user
/// repository enforces the unique-email constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, UserValidationError> {
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }

    /// Case-insensitive comparison used for the unique-email constraint.
    pub fn matches_ignore_case(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Application user.
///
/// ## Invariants
/// - `name` is non-empty (enforced by the inbound validation gate).
/// - `email` is unique across the collection, compared case-insensitively;
///   the repository enforces this on create.
/// - `created_at == updated_at` at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Repository-assigned identifier.
    #[schema(value_type = u64, example = 1)]
    pub id: RecordId,
    /// Full name of the user.
    #[schema(example = "Alice")]
    pub name: String,
    /// Unique email address.
    #[schema(value_type = String, example = "alice@example.com")]
    pub email: EmailAddress,
    /// Age in years.
    #[schema(example = 42)]
    pub age: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Full name, non-empty.
    pub name: String,
    /// Email address, checked for uniqueness by the repository.
    pub email: EmailAddress,
    /// Age in years.
    pub age: u32,
}
