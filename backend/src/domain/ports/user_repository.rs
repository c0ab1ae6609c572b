//! Driven port for user storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, RecordId, User};

/// Persistence errors raised by user repository adapters.
///
/// The duplicate-email case is a dedicated variant so services can map it to
/// a conflict without inspecting failure text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Adapter-specific failure detail, logged but never shown to clients.
        message: String,
    },
    /// Another record already holds this email, compared case-insensitively.
    #[error("user with email {email} already exists")]
    DuplicateEmail {
        /// The email that collided.
        email: String,
    },
}

impl UserPersistenceError {
    /// Construct a [`UserPersistenceError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Construct a [`UserPersistenceError::DuplicateEmail`].
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }
}

/// Storage collaborator owning the user collection.
///
/// Only implementations of this trait assign identifiers and timestamps, and
/// only they enforce the unique-email constraint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: RecordId) -> Result<Option<User>, UserPersistenceError>;

    /// Store a new user, assigning its identifier and timestamps.
    ///
    /// Fails with [`UserPersistenceError::DuplicateEmail`] when the email
    /// collides case-insensitively with an existing record.
    async fn create(&self, new_user: NewUser) -> Result<User, UserPersistenceError>;

    /// Remove a user by identifier.
    ///
    /// Returns `true` when a record existed and was removed, `false` when the
    /// identifier was absent. Absence is a normal outcome, not an error.
    async fn delete_by_id(&self, id: RecordId) -> Result<bool, UserPersistenceError>;
}
