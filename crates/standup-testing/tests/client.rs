//! The in-process client against a fixture's application.

use axum::http::StatusCode;
use serde_json::{Value, json};

use standup_core::AppConfig;
use standup_testing::TestContext;

#[tokio::test]
async fn health_check_through_the_client() {
    let ctx = TestContext::set_up(AppConfig::testing()).await.unwrap();

    let response = ctx.client().get("/health").await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn factory_rows_are_visible_over_http() {
    let ctx = TestContext::set_up(AppConfig::testing()).await.unwrap();
    let status = ctx.status().save(true).build().await.unwrap();

    let response = ctx.client().get("/api/projects/test-project/statuses").await.unwrap();
    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json().unwrap();
    assert_eq!(body[0]["id"], status.id.unwrap());
    assert_eq!(body[0]["user"]["slug"], "jdoe");

    let response = ctx
        .client()
        .get(&format!("/api/statuses/{}", status.id.unwrap()))
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn http_writes_are_visible_to_the_session() {
    let ctx = TestContext::set_up(AppConfig::testing()).await.unwrap();
    ctx.user().save(true).build().await.unwrap();
    ctx.project().save(true).build().await.unwrap();

    let response = ctx
        .client()
        .post_json(
            "/api/statuses",
            &json!({"user": "jdoe", "project": "test-project", "content": "Done"}),
        )
        .await
        .unwrap();
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(ctx.count_rows("statuses").await.unwrap(), 1);

    let response = ctx.client().delete("/api/statuses/1").await.unwrap();
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(ctx.count_rows("statuses").await.unwrap(), 0);
}

#[tokio::test]
async fn missing_resources_are_json_errors() {
    let ctx = TestContext::set_up(AppConfig::testing()).await.unwrap();

    let response = ctx.client().get("/api/users/nobody").await.unwrap();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let body: Value = response.json().unwrap();
    assert_eq!(body["status"], 404);
}
