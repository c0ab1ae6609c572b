//! Lofty view domain service.
//!
//! Implements the driving ports for the view resource, translating typed
//! persistence outcomes into domain errors. Storage failure detail is logged
//! here and replaced with a generic client-facing message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{ViewPersistenceError, ViewRepository, ViewsCommand, ViewsQuery};
use crate::domain::{DomainResult, Error, LoftyView, NewLoftyView, RecordId};

/// View service implementing [`ViewsQuery`] and [`ViewsCommand`].
#[derive(Clone)]
pub struct ViewService<R> {
    repo: Arc<R>,
}

impl<R> ViewService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: ViewRepository> ViewService<R> {
    fn map_persistence_error(error: &ViewPersistenceError, client_message: &str) -> Error {
        let ViewPersistenceError::Query { message } = error;
        error!(detail = %message, "view repository failure");
        Error::internal(client_message)
    }
}

#[async_trait]
impl<R: ViewRepository> ViewsQuery for ViewService<R> {
    async fn list_views(&self) -> DomainResult<Vec<LoftyView>> {
        self.repo.list().await.map_err(|err| {
            Self::map_persistence_error(&err, "An error occurred while retrieving lofty views.")
        })
    }

    async fn get_view(&self, id: RecordId) -> DomainResult<LoftyView> {
        let found = self.repo.find_by_id(id).await.map_err(|err| {
            Self::map_persistence_error(&err, "An error occurred while finding lofty view.")
        })?;
        found.ok_or_else(|| Error::not_found("Lofty view not found"))
    }
}

#[async_trait]
impl<R: ViewRepository> ViewsCommand for ViewService<R> {
    async fn create_view(&self, new_view: NewLoftyView) -> DomainResult<LoftyView> {
        self.repo.create(new_view).await.map_err(|err| {
            Self::map_persistence_error(&err, "An error occurred while creating the lofty view.")
        })
    }
}
