//! Driven port for lofty view storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{LoftyView, NewLoftyView, RecordId};

/// Persistence errors raised by view repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewPersistenceError {
    /// Query or mutation failed during execution.
    #[error("view repository query failed: {message}")]
    Query {
        /// Adapter-specific failure detail, logged but never shown to clients.
        message: String,
    },
}

impl ViewPersistenceError {
    /// Construct a [`ViewPersistenceError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage collaborator owning the lofty view collection.
///
/// Only implementations of this trait assign identifiers and timestamps.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Return every stored view.
    async fn list(&self) -> Result<Vec<LoftyView>, ViewPersistenceError>;

    /// Fetch a view by identifier.
    async fn find_by_id(&self, id: RecordId)
        -> Result<Option<LoftyView>, ViewPersistenceError>;

    /// Store a new view, assigning its identifier and timestamps.
    async fn create(&self, new_view: NewLoftyView) -> Result<LoftyView, ViewPersistenceError>;
}
