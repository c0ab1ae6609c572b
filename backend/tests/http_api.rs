//! End-to-end coverage of the HTTP surface through the assembled application.
//!
//! These tests drive the same app the binary serves: seeded in-memory
//! repositories, domain services, validation gate, envelope rendering, and
//! the request-id middleware.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use chrono::{TimeZone, Utc};
use mockable::{Clock, MockClock};
use rstest::rstest;
use serde_json::{json, Value};

use lofty_backend::inbound::http::health::HealthState;
use lofty_backend::inbound::http::state::HttpState;
use lofty_backend::server::{build_app, build_http_state};

fn fixed_clock() -> Arc<dyn Clock> {
    let stamp = Utc
        .with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    let mut clock = MockClock::new();
    clock.expect_utc().return_const(stamp);
    Arc::new(clock)
}

fn app_state() -> (web::Data<HttpState>, web::Data<HealthState>) {
    (
        web::Data::new(build_http_state(fixed_clock())),
        web::Data::new(HealthState::new()),
    )
}

async fn body_json<B>(response: ServiceResponse<B>) -> Value
where
    B: MessageBody,
    B::Error: std::fmt::Debug,
{
    let bytes = actix_test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}

async fn collection_len<S, B>(app: &S, uri: &str) -> usize
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
    B::Error: std::fmt::Debug,
{
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::get().uri(uri).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["responseObject"]
        .as_array()
        .expect("array payload")
        .len()
}

#[actix_web::test]
async fn create_user_assigns_next_id_with_matching_timestamps() {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({
                "name": "John Doe",
                "email": "john@example.com",
                "age": 30,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let value = body_json(response).await;
    let record = &value["responseObject"];
    // Seeded users hold ids 1 and 2.
    assert_eq!(record["id"], 3);
    assert_eq!(record["createdAt"], record["updatedAt"]);
}

#[actix_web::test]
async fn duplicate_email_conflict_leaves_collection_unchanged() {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;
    let before = collection_len(&app, "/users").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .set_json(json!({
                "name": "John Doe",
                "email": "ALICE@example.com",
                "age": 30,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let value = body_json(response).await;
    assert_eq!(value["message"], "User with this email already exists");
    assert_eq!(value["responseObject"], Value::Null);

    assert_eq!(collection_len(&app, "/users").await, before);
}

#[actix_web::test]
async fn delete_shrinks_collection_once_and_second_delete_misses() {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;
    let before = collection_len(&app, "/users").await;

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/2").to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let bytes = actix_test::read_body(first).await;
    assert!(bytes.is_empty(), "204 responses carry no body");
    assert_eq!(collection_len(&app, "/users").await, before - 1);

    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/2").to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(collection_len(&app, "/users").await, before - 1);
}

#[actix_web::test]
async fn delete_of_absent_id_keeps_collection_size() {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;
    let before = collection_len(&app, "/users").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/users/99").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(collection_len(&app, "/users").await, before);
}

#[actix_web::test]
async fn get_after_post_round_trips_the_created_view() {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;

    let created = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/lofty-views")
            .set_json(json!({
                "name": "Test View",
                "description": "A quiet overlook",
                "location": "Somewhere high",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_value = body_json(created).await;
    let id = created_value["responseObject"]["id"]
        .as_u64()
        .expect("numeric id");

    let fetched = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/lofty-views/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched_value = body_json(fetched).await;
    assert_eq!(
        fetched_value["responseObject"],
        created_value["responseObject"]
    );
}

#[actix_web::test]
async fn minimal_view_create_matches_reference_shape() {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/lofty-views")
            .set_json(json!({ "name": "Test View" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let value = body_json(response).await;
    let record = &value["responseObject"];
    assert_eq!(record["id"], 4);
    assert_eq!(record["name"], "Test View");
    assert_eq!(record["hearts"], 0);
    assert!(record.get("description").is_none());
    assert!(record.get("location").is_none());
    assert_eq!(record["createdAt"], record["updatedAt"]);
}

#[rstest]
#[case::zero("/users/0")]
#[case::negative("/users/-1")]
#[case::non_numeric("/users/abc")]
#[case::view_zero("/lofty-views/0")]
#[actix_web::test]
async fn out_of_range_ids_never_reach_storage(#[case] uri: &str) {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri(uri).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = body_json(response).await;
    assert_eq!(value["success"], false);
    assert_eq!(value["responseObject"], Value::Null);
    let message = value["message"].as_str().expect("message string");
    assert!(message.starts_with("Invalid input: ID must be"));
}

#[actix_web::test]
async fn malformed_json_body_renders_a_failure_envelope() {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let value = body_json(response).await;
    assert_eq!(value["success"], false);
    assert_eq!(value["statusCode"], 400);
    let message = value["message"].as_str().expect("message string");
    assert!(message.starts_with("Invalid input:"));
}

#[rstest]
#[case::list_views("/lofty-views", StatusCode::OK)]
#[case::get_view("/lofty-views/1", StatusCode::OK)]
#[case::view_missing("/lofty-views/999", StatusCode::NOT_FOUND)]
#[case::list_users("/users", StatusCode::OK)]
#[case::user_missing("/users/999", StatusCode::NOT_FOUND)]
#[case::bad_id("/users/abc", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn envelope_flag_and_status_stay_consistent(
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri(uri).to_request(),
    )
    .await;
    assert_eq!(response.status(), expected);

    let value = body_json(response).await;
    let status = value["statusCode"].as_u64().expect("statusCode number");
    assert_eq!(status, u64::from(expected.as_u16()));
    assert_eq!(
        value["success"].as_bool().expect("success flag"),
        status < 400
    );
    if status >= 400 {
        assert_eq!(value["responseObject"], Value::Null);
    }
}

#[actix_web::test]
async fn responses_carry_the_request_id_header() {
    let (http_state, health_state) = app_state();
    let app = actix_test::init_service(build_app(http_state, health_state)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/users").to_request(),
    )
    .await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[actix_web::test]
async fn readiness_flips_after_mark_ready() {
    let (http_state, health_state) = app_state();
    let app =
        actix_test::init_service(build_app(http_state, health_state.clone())).await;

    let before = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

    health_state.mark_ready();
    let after = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/health/ready")
            .to_request(),
    )
    .await;
    assert_eq!(after.status(), StatusCode::OK);
    let value = body_json(after).await;
    assert_eq!(value["message"], "Service is ready");
}
