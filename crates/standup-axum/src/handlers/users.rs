//! User handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use standup_core::{Status, User};

use super::TimelineQuery;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub name: String,
    pub email: String,
    /// Derived from the username when omitted.
    pub slug: Option<String>,
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, HttpError> {
    let users = state.core.users().list().await?;
    Ok(Json(users))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), HttpError> {
    let user = state
        .core
        .users()
        .create(req.username, req.name, req.email, req.slug)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{slug}
pub async fn get(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<Json<User>, HttpError> {
    let user = state.core.users().get(&slug).await?;
    Ok(Json(user))
}

/// GET /api/users/{slug}/statuses
pub async fn statuses(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
    ApiQuery(query): ApiQuery<TimelineQuery>,
) -> Result<Json<Vec<Status>>, HttpError> {
    let statuses = state.core.statuses().for_user(&slug, query.limit).await?;
    Ok(Json(statuses))
}
