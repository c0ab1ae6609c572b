//! Backend entry-point: wires REST endpoints and OpenAPI docs.

use std::sync::Arc;

use actix_web::web;
use mockable::{DefaultClock, DefaultEnv};
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use lofty_backend::inbound::http::health::HealthState;
use lofty_backend::server::{create_server, server_config_from_env};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = server_config_from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, Arc::new(DefaultClock))?;
    server.await
}
