//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend only
//! on the driving ports and remain testable without real storage.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery, ViewsCommand, ViewsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the lofty view resource.
    pub views_query: Arc<dyn ViewsQuery>,
    /// Write side of the lofty view resource.
    pub views_command: Arc<dyn ViewsCommand>,
    /// Read side of the user resource.
    pub users_query: Arc<dyn UsersQuery>,
    /// Write side of the user resource.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        views_query: Arc<dyn ViewsQuery>,
        views_command: Arc<dyn ViewsCommand>,
        users_query: Arc<dyn UsersQuery>,
        users_command: Arc<dyn UsersCommand>,
    ) -> Self {
        Self {
            views_query,
            views_command,
            users_query,
            users_command,
        }
    }
}
