//! Status update handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use standup_core::Status;

use super::TimelineQuery;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Request body for posting a status update.
#[derive(Debug, Deserialize)]
pub struct PostStatusRequest {
    /// Slug of the posting user.
    pub user: String,
    /// Slug of the project the update is about.
    pub project: String,
    pub content: String,
}

/// The global timeline, newest first.
/// GET /api/statuses
pub async fn timeline(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TimelineQuery>,
) -> Result<Json<Vec<Status>>, HttpError> {
    let statuses = state.core.statuses().timeline(query.limit).await?;
    Ok(Json(statuses))
}

/// POST /api/statuses
pub async fn post(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PostStatusRequest>,
) -> Result<(StatusCode, Json<Status>), HttpError> {
    let status = state
        .core
        .statuses()
        .post(&req.user, &req.project, req.content)
        .await?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// GET /api/statuses/{id}
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Status>, HttpError> {
    let status = state.core.statuses().get(id).await?;
    Ok(Json(status))
}

/// DELETE /api/statuses/{id}
pub async fn remove(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    state.core.statuses().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
