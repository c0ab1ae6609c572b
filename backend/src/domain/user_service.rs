//! User domain service.
//!
//! Implements the driving ports for the user resource. The duplicate-email
//! signal arrives as a typed persistence variant and is mapped to a conflict
//! here; no failure-text inspection is involved.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{DomainResult, Error, NewUser, RecordId, User};

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: UserRepository> UserService<R> {
    fn map_query_error(error: &UserPersistenceError, client_message: &str) -> Error {
        error!(detail = %error, "user repository failure");
        Error::internal(client_message)
    }
}

#[async_trait]
impl<R: UserRepository> UsersQuery for UserService<R> {
    async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repo
            .list()
            .await
            .map_err(|err| Self::map_query_error(&err, "An error occurred while retrieving users."))
    }

    async fn get_user(&self, id: RecordId) -> DomainResult<User> {
        let found = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|err| Self::map_query_error(&err, "An error occurred while finding user."))?;
        found.ok_or_else(|| Error::not_found("User not found"))
    }
}

#[async_trait]
impl<R: UserRepository> UsersCommand for UserService<R> {
    async fn create_user(&self, new_user: NewUser) -> DomainResult<User> {
        self.repo.create(new_user).await.map_err(|err| match err {
            UserPersistenceError::DuplicateEmail { .. } => {
                Error::conflict("User with this email already exists")
            }
            other @ UserPersistenceError::Query { .. } => {
                Self::map_query_error(&other, "An error occurred while creating user.")
            }
        })
    }

    async fn delete_user(&self, id: RecordId) -> DomainResult<()> {
        let deleted = self
            .repo
            .delete_by_id(id)
            .await
            .map_err(|err| Self::map_query_error(&err, "An error occurred while deleting user."))?;
        if deleted {
            Ok(())
        } else {
            Err(Error::not_found("User not found"))
        }
    }
}
