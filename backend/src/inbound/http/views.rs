//! Lofty view API handlers.
//!
//! ```text
//! GET  /lofty-views
//! GET  /lofty-views/{id}
//! POST /lofty-views {"name":"Test View"}
//! ```

use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, LoftyView, NewLoftyView};
use crate::inbound::http::envelope::{success_response, Envelope};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    invalid_input, parse_record_id, require_non_empty, FieldErrors,
};
use crate::inbound::http::ApiResult;

/// Creation request body for `POST /lofty-views`.
///
/// Fields are optional at the serde level so the validation gate can report
/// every missing or malformed field in one combined message.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoftyViewRequest {
    /// Display name of the view; required, non-empty.
    #[schema(example = "Test View")]
    pub name: Option<String>,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Optional human-readable location.
    pub location: Option<String>,
}

impl TryFrom<CreateLoftyViewRequest> for NewLoftyView {
    type Error = Error;

    fn try_from(value: CreateLoftyViewRequest) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();
        let name = require_non_empty(value.name.as_deref(), "Name is required", &mut errors);
        errors.into_result()?;
        let name = name.ok_or_else(|| invalid_input("Name is required"))?;
        Ok(Self {
            name,
            description: value.description,
            location: value.location,
        })
    }
}

/// List all lofty views.
///
/// An empty collection is a success carrying an empty sequence.
#[utoipa::path(
    get,
    path = "/lofty-views",
    responses(
        (status = 200, description = "Lofty views found", body = Envelope<Vec<LoftyView>>),
        (status = 500, description = "Internal server error", body = Envelope<serde_json::Value>)
    ),
    tags = ["LoftyView"],
    operation_id = "listLoftyViews"
)]
#[get("/lofty-views")]
pub async fn list_views(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let views = state.views_query.list_views().await?;
    Ok(success_response(
        StatusCode::OK,
        "Lofty views found",
        views,
    ))
}

/// Fetch a single lofty view by identifier.
#[utoipa::path(
    get,
    path = "/lofty-views/{id}",
    params(("id" = u64, Path, minimum = 1, description = "View identifier")),
    responses(
        (status = 200, description = "Lofty view found", body = Envelope<LoftyView>),
        (status = 400, description = "Invalid identifier", body = Envelope<serde_json::Value>),
        (status = 404, description = "Lofty view not found", body = Envelope<serde_json::Value>),
        (status = 500, description = "Internal server error", body = Envelope<serde_json::Value>)
    ),
    tags = ["LoftyView"],
    operation_id = "getLoftyView"
)]
#[get("/lofty-views/{id}")]
pub async fn get_view(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&path.into_inner())?;
    let view = state.views_query.get_view(id).await?;
    Ok(success_response(StatusCode::OK, "Lofty view found", view))
}

/// Create a new lofty view.
#[utoipa::path(
    post,
    path = "/lofty-views",
    request_body = CreateLoftyViewRequest,
    responses(
        (status = 201, description = "Lofty view created successfully", body = Envelope<LoftyView>),
        (status = 400, description = "Validation failure", body = Envelope<serde_json::Value>),
        (status = 500, description = "Internal server error", body = Envelope<serde_json::Value>)
    ),
    tags = ["LoftyView"],
    operation_id = "createLoftyView"
)]
#[post("/lofty-views")]
pub async fn create_view(
    state: web::Data<HttpState>,
    payload: web::Json<CreateLoftyViewRequest>,
) -> ApiResult<HttpResponse> {
    let new_view = NewLoftyView::try_from(payload.into_inner())?;
    let view = state.views_command.create_view(new_view).await?;
    Ok(success_response(
        StatusCode::CREATED,
        "Lofty view created successfully",
        view,
    ))
}
