//! Integration tests for the Axum web server.
//!
//! These tests drive the router in-process with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use standup_axum::{App, create_app};
use standup_core::AppConfig;

async fn test_app() -> App {
    let app = create_app(AppConfig::testing()).await.unwrap();
    app.metadata()
        .create_all(app.session().bind())
        .await
        .unwrap();
    app
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = test_app().await;

    let response = app.router().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn projects_endpoint_returns_empty_array() {
    let app = test_app().await;
    let (status, body) = send(&app.router(), get("/api/projects")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_project_derives_slug_and_rejects_duplicates() {
    let app = test_app().await;
    let router = app.router();

    let (status, body) = send(
        &router,
        post_json("/api/projects", &json!({"name": "Launch Plan"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["slug"], "launch-plan");

    let (status, body) = send(&router, get("/api/projects/launch-plan")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Launch Plan");

    let (status, body) = send(
        &router,
        post_json("/api/projects", &json!({"name": "Other", "slug": "launch-plan"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn invalid_input_is_a_bad_request() {
    let app = test_app().await;
    let (status, body) = send(
        &app.router(),
        post_json(
            "/api/users",
            &json!({"username": "jdoe", "name": "John Doe", "email": "not-an-email"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn status_lifecycle() {
    let app = test_app().await;
    let router = app.router();

    send(
        &router,
        post_json(
            "/api/users",
            &json!({"username": "jdoe", "name": "John Doe", "email": "john@doe.com"}),
        ),
    )
    .await;
    send(
        &router,
        post_json("/api/projects", &json!({"name": "Test Project"})),
    )
    .await;

    let (status, created) = send(
        &router,
        post_json(
            "/api/statuses",
            &json!({"user": "jdoe", "project": "test-project", "content": "Shipped it"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["user"]["username"], "jdoe");
    assert_eq!(created["project"]["slug"], "test-project");
    let id = created["id"].as_i64().unwrap();

    let (status, timeline) = send(&router, get("/api/users/jdoe/statuses")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timeline.as_array().unwrap().len(), 1);

    let (status, timeline) = send(&router, get("/api/statuses?limit=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timeline[0]["content"], "Shipped it");

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/statuses/{id}"))
            .body(Body::empty())
            .unwrap()
    };
    let (status, _) = send(&router, delete()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&router, delete()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn posting_for_an_unknown_user_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(
        &app.router(),
        post_json(
            "/api/statuses",
            &json!({"user": "ghost", "project": "none", "content": "Boo"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("ghost"));
}

#[tokio::test]
async fn internal_errors_keep_detail_in_testing_mode() {
    // No create_all: every table query fails.
    let app = create_app(AppConfig::testing()).await.unwrap();
    let (status, body) = send(&app.router(), get("/api/projects")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("no such table"));
}

#[tokio::test]
async fn internal_errors_are_redacted_outside_testing_mode() {
    let config = AppConfig::testing().with_testing(false);
    let app = create_app(config).await.unwrap();
    let (status, body) = send(&app.router(), get("/api/projects")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["status"], 500);
}

#[tokio::test]
async fn file_database_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("standup.db").display());
    let config = AppConfig::testing().with_database_url(url);

    let first = create_app(config.clone()).await.unwrap();
    first
        .metadata()
        .create_all(first.session().bind())
        .await
        .unwrap();
    send(
        &first.router(),
        post_json("/api/projects", &json!({"name": "Persisted"})),
    )
    .await;

    let second = create_app(config).await.unwrap();
    let (status, body) = send(&second.router(), get("/api/projects/persisted")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Persisted");
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let app = test_app().await;
    let (status, body) = send(
        &app.router(),
        post_json("/api/statuses", &json!({"user": "jdoe"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("project"));
}

#[tokio::test]
async fn non_numeric_ids_get_json_errors() {
    let app = test_app().await;
    let router = app.router();

    let (status, body) = send(&router, get("/api/statuses/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, body) = send(&router, get("/api/statuses?limit=lots")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}
