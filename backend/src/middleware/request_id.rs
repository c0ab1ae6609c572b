//! Middleware attaching a request-scoped identifier and completion log.
//!
//! Each incoming request receives a UUID stored in task-local storage for
//! correlation across log lines, echoed back in the `x-request-id` response
//! header. Tokio task-local variables are not inherited across spawned
//! tasks; use [`RequestId::scope`] when moving work onto other tasks.

use std::future::Future;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tokio::task_local;
use tracing::{error, info};
use uuid::Uuid;

/// Response header carrying the request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

task_local! {
    static REQUEST_ID: RequestId;
}

/// Per-request identifier exposed via task-local storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(Uuid);

impl RequestId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the current request identifier if one is in scope.
    pub fn current() -> Option<Self> {
        REQUEST_ID.try_with(|id| *id).ok()
    }

    /// Execute the provided future with the supplied identifier in scope.
    pub async fn scope<Fut>(request_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        REQUEST_ID.scope(request_id, fut).await
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RequestId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Middleware wiring [`RequestId`] into every request and logging completion.
#[derive(Clone)]
pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequestTrace`].
pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = RequestId::generate();
        let header_value = request_id.to_string();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let fut = self.service.call(req);
        Box::pin(RequestId::scope(request_id, async move {
            let mut res = fut.await?;
            info!(
                %method,
                %path,
                status = res.status().as_u16(),
                request_id = %request_id,
                "request completed"
            );
            match HeaderValue::from_str(&header_value) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }
                Err(err) => {
                    error!(
                        error = %err,
                        request_id = %request_id,
                        "failed to encode request identifier header"
                    );
                }
            }
            Ok(res)
        }))
    }
}
