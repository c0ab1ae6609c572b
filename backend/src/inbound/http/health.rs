//! Health endpoints: liveness and readiness probes.
//!
//! Probe bodies reuse the response envelope so monitoring output matches the
//! rest of the API.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::{header, StatusCode};
use actix_web::{get, web, HttpResponse};
use serde_json::Value;

use crate::inbound::http::envelope::Envelope;

/// Shared health state tracking readiness and liveness.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready to receive traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

fn probe_response(probe_ok: bool, ok_message: &str, failed_message: &str) -> HttpResponse {
    let envelope = if probe_ok {
        Envelope::<Value>::success(ok_message, Value::Null, StatusCode::OK)
    } else {
        Envelope::<Value>::failure(failed_message, StatusCode::SERVICE_UNAVAILABLE)
    };
    let status = if probe_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    HttpResponse::build(status)
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(envelope)
}

/// Readiness probe. 200 once the server can handle traffic, 503 before that.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready", body = Envelope<serde_json::Value>),
        (status = 503, description = "Service is not ready", body = Envelope<serde_json::Value>)
    ),
    tags = ["Health"],
    operation_id = "healthReady"
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready(), "Service is ready", "Service is not ready")
}

/// Liveness probe. 503 signals orchestrators to restart the process.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is healthy", body = Envelope<serde_json::Value>),
        (status = 503, description = "Service is shutting down", body = Envelope<serde_json::Value>)
    ),
    tags = ["Health"],
    operation_id = "healthLive"
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(
        state.is_alive(),
        "Service is healthy",
        "Service is shutting down",
    )
}
