//! HTTP server configuration parsed from the environment.
//!
//! Centralises the `HOST`/`PORT` toggles so they are validated consistently
//! and can be tested in isolation with a mock environment.

use std::net::SocketAddr;

use mockable::Env;
use tracing::warn;

const HOST_ENV: &str = "HOST";
const PORT_ENV: &str = "PORT";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while validating server configuration.
#[derive(thiserror::Error, Debug)]
pub enum ServerConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted shape.
        expected: &'static str,
    },
}

/// Validated configuration for creating the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a configuration binding to the given address.
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }
}

/// Build server configuration from environment variables.
///
/// `HOST` defaults to `127.0.0.1` and `PORT` to `8080` when unset; invalid
/// values are rejected rather than silently replaced.
pub fn server_config_from_env<E: Env>(env: &E) -> Result<ServerConfig, ServerConfigError> {
    let host = match env.string(HOST_ENV) {
        Some(value) => value,
        None => {
            warn!("HOST not set; defaulting to {DEFAULT_HOST}");
            DEFAULT_HOST.to_owned()
        }
    };
    let port = match env.string(PORT_ENV) {
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ServerConfigError::InvalidEnv {
                name: PORT_ENV,
                value,
                expected: "an integer in 1..=65535",
            })?,
        None => {
            warn!("PORT not set; defaulting to {DEFAULT_PORT}");
            DEFAULT_PORT
        }
    };

    let bind_addr = format!("{host}:{port}")
        .parse()
        .map_err(|_| ServerConfigError::InvalidEnv {
            name: HOST_ENV,
            value: host,
            expected: "an IP address",
        })?;
    Ok(ServerConfig::new(bind_addr))
}
