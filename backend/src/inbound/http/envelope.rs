//! Uniform response envelope.
//!
//! Every non-204 response body is one of these, for successes and failures
//! alike. The envelope is immutable once constructed and serialised verbatim.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success/failure wrapper serialised as the HTTP response body.
///
/// ## Invariants
/// - `success == (status_code < 400)`.
/// - `response_object` is `None` whenever `success` is false; the failure
///   constructor takes no payload, so partial data cannot leak on error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    #[schema(example = "Users found")]
    pub message: String,
    /// Operation payload; always `null` on failure.
    pub response_object: Option<T>,
    /// HTTP status code mirrored into the body.
    #[schema(example = 200)]
    pub status_code: u16,
}

impl<T> Envelope<T> {
    /// Wrap a successful outcome. `status` must be below 400.
    pub fn success(message: impl Into<String>, payload: T, status: StatusCode) -> Self {
        debug_assert!(status.as_u16() < 400, "success envelopes use 2xx/3xx statuses");
        Self {
            success: true,
            message: message.into(),
            response_object: Some(payload),
            status_code: status.as_u16(),
        }
    }

    /// Wrap a failed outcome. `status` must be 400 or above.
    pub fn failure(message: impl Into<String>, status: StatusCode) -> Self {
        debug_assert!(status.as_u16() >= 400, "failure envelopes use 4xx/5xx statuses");
        Self {
            success: false,
            message: message.into(),
            response_object: None,
            status_code: status.as_u16(),
        }
    }
}

/// Build a success response whose body is the envelope and whose HTTP status
/// matches the envelope's `status_code`.
pub fn success_response<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    payload: T,
) -> HttpResponse {
    HttpResponse::build(status).json(Envelope::success(message, payload, status))
}
