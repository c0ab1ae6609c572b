//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users {"name":"John Doe","email":"john@example.com","age":30}
//! DELETE /users/{id}
//! ```

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User};
use crate::inbound::http::envelope::{success_response, Envelope};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_record_id, require_email, require_non_empty, require_non_negative, FieldErrors,
};
use crate::inbound::http::ApiResult;

/// Creation request body for `POST /users`.
///
/// Fields are optional at the serde level so the validation gate can report
/// every missing or malformed field in one combined message.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Full name; required, non-empty.
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    /// Email address; required, unique across users.
    #[schema(example = "john@example.com")]
    pub email: Option<String>,
    /// Age in years; required, non-negative.
    #[schema(example = 30)]
    pub age: Option<i64>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::new();
        let name = require_non_empty(value.name.as_deref(), "Name is required", &mut errors);
        let email = require_email(value.email.as_deref(), "Valid email is required", &mut errors);
        let age = require_non_negative(
            value.age,
            "Age must be a non-negative integer",
            &mut errors,
        );
        errors.into_result()?;
        match (name, email, age) {
            (Some(name), Some(email), Some(age)) => Ok(Self { name, email, age }),
            // All three were checked above; reaching here is a gate defect.
            _ => Err(Error::internal("user validation produced no payload")),
        }
    }
}

/// List all users.
///
/// An empty collection is a success carrying an empty sequence.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users found", body = Envelope<Vec<User>>),
        (status = 500, description = "Internal server error", body = Envelope<serde_json::Value>)
    ),
    tags = ["User"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users_query.list_users().await?;
    Ok(success_response(StatusCode::OK, "Users found", users))
}

/// Fetch a single user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u64, Path, minimum = 1, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = Envelope<User>),
        (status = 400, description = "Invalid identifier", body = Envelope<serde_json::Value>),
        (status = 404, description = "User not found", body = Envelope<serde_json::Value>),
        (status = 500, description = "Internal server error", body = Envelope<serde_json::Value>)
    ),
    tags = ["User"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&path.into_inner())?;
    let user = state.users_query.get_user(id).await?;
    Ok(success_response(StatusCode::OK, "User found", user))
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = Envelope<User>),
        (status = 400, description = "Validation failure", body = Envelope<serde_json::Value>),
        (status = 409, description = "Email already taken", body = Envelope<serde_json::Value>),
        (status = 500, description = "Internal server error", body = Envelope<serde_json::Value>)
    ),
    tags = ["User"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = NewUser::try_from(payload.into_inner())?;
    let user = state.users_command.create_user(new_user).await?;
    Ok(success_response(
        StatusCode::CREATED,
        "User created successfully",
        user,
    ))
}

/// Delete a user by identifier.
///
/// Success is 204 with an empty body; the envelope is only used for failures.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u64, Path, minimum = 1, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, description = "Invalid identifier", body = Envelope<serde_json::Value>),
        (status = 404, description = "User not found", body = Envelope<serde_json::Value>),
        (status = 500, description = "Internal server error", body = Envelope<serde_json::Value>)
    ),
    tags = ["User"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&path.into_inner())?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
