//! Backend library modules.
//!
//! Two CRUD resources (lofty views and users) served over REST with a
//! uniform response envelope, schema-driven request validation, in-memory
//! storage, and generated OpenAPI documentation.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-identifier middleware applied to the whole HTTP surface.
pub use middleware::request_id::RequestTrace;
