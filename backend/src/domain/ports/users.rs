//! Driving ports for user use-cases.

use async_trait::async_trait;

use crate::domain::{DomainResult, NewUser, RecordId, User};

/// Domain use-case port for reading users.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user. An empty collection is a success with an empty
    /// sequence, never a failure.
    async fn list_users(&self) -> DomainResult<Vec<User>>;

    /// Fetch a single user, failing with not-found when absent.
    async fn get_user(&self, id: RecordId) -> DomainResult<User>;
}

/// Domain use-case port for mutating users.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a new user and return it with identifier and timestamps set.
    ///
    /// Fails with a conflict when the email is already taken.
    async fn create_user(&self, new_user: NewUser) -> DomainResult<User>;

    /// Delete a user, failing with not-found when the identifier is absent.
    async fn delete_user(&self, id: RecordId) -> DomainResult<()>;
}
