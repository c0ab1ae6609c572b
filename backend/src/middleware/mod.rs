//! Actix middleware shared across the HTTP surface.

pub mod request_id;
