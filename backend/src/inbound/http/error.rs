//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting handlers
//! use `?` on domain results. Every modeled failure renders as a failure
//! envelope with the status derived from its error code; no stack traces or
//! storage detail reach the client.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::Value;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::envelope::Envelope;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(Envelope::<Value>::failure(self.message(), status))
    }
}
