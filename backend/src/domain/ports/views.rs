//! Driving ports for lofty view use-cases.
//!
//! Inbound adapters (HTTP handlers) call these ports to read and mutate the
//! view collection without importing storage concerns.

use async_trait::async_trait;

use crate::domain::{DomainResult, LoftyView, NewLoftyView, RecordId};

/// Domain use-case port for reading lofty views.
#[async_trait]
pub trait ViewsQuery: Send + Sync {
    /// Return every view. An empty collection is a success with an empty
    /// sequence, never a failure.
    async fn list_views(&self) -> DomainResult<Vec<LoftyView>>;

    /// Fetch a single view, failing with not-found when absent.
    async fn get_view(&self, id: RecordId) -> DomainResult<LoftyView>;
}

/// Domain use-case port for mutating lofty views.
#[async_trait]
pub trait ViewsCommand: Send + Sync {
    /// Create a new view and return it with identifier and timestamps set.
    async fn create_view(&self, new_view: NewLoftyView) -> DomainResult<LoftyView>;
}
