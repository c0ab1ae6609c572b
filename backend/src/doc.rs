//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates every HTTP endpoint and the schemas they reference.
//! The generated specification backs Swagger UI (debug builds) at `/docs` and
//! is exported via the `openapi-dump` binary for external tooling.

use utoipa::OpenApi;

use crate::domain::{LoftyView, User};
use crate::inbound::http::users::CreateUserRequest;
use crate::inbound::http::views::CreateLoftyViewRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lofty backend API",
        description = "CRUD access to scenic lofty views and users, with a uniform response envelope.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::views::list_views,
        crate::inbound::http::views::get_view,
        crate::inbound::http::views::create_view,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(LoftyView, User, CreateLoftyViewRequest, CreateUserRequest)),
    tags(
        (name = "LoftyView", description = "Operations on scenic lofty views"),
        (name = "User", description = "Operations on users"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
