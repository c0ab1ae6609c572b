//! Server construction and middleware wiring.

mod config;

pub use config::{server_config_from_env, ServerConfig, ServerConfigError};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use mockable::Clock;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{Error, UserService, ViewService};
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users};
use crate::inbound::http::views::{create_view, get_view, list_views};
use crate::middleware::request_id::RequestTrace;
use crate::outbound::memory::{InMemoryUserRepository, InMemoryViewRepository};

/// Build handler state over seeded in-memory repositories.
///
/// Repositories are constructed here and injected; nothing is process-global,
/// so tests can build as many isolated states as they need.
pub fn build_http_state(clock: Arc<dyn Clock>) -> HttpState {
    let view_service = Arc::new(ViewService::new(Arc::new(InMemoryViewRepository::seeded(
        clock.clone(),
    ))));
    let user_service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::seeded(
        clock,
    ))));
    HttpState::new(
        view_service.clone(),
        view_service,
        user_service.clone(),
        user_service,
    )
}

/// Assemble the application with routes, state, and middleware.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Malformed JSON bodies become uniform 400 envelopes instead of the
    // framework's default error page.
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(format!("Invalid input: {err}")).into());

    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(json_config)
        .wrap(RequestTrace)
        .service(list_views)
        .service(get_view)
        .service(create_view)
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(delete_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    clock: Arc<dyn Clock>,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(clock));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(http_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
