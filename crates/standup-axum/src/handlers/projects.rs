//! Project handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use standup_core::{Project, Status};

use super::TimelineQuery;
use crate::error::HttpError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Request body for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    /// Derived from the name when omitted.
    pub slug: Option<String>,
}

/// List all projects.
/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Project>>, HttpError> {
    let projects = state.core.projects().list().await?;
    Ok(Json(projects))
}

/// Create a project.
/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), HttpError> {
    let project = state.core.projects().create(req.name, req.slug).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a single project by slug.
/// GET /api/projects/{slug}
pub async fn get(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<Json<Project>, HttpError> {
    let project = state.core.projects().get(&slug).await?;
    Ok(Json(project))
}

/// The project's timeline, newest first.
/// GET /api/projects/{slug}/statuses
pub async fn statuses(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
    ApiQuery(query): ApiQuery<TimelineQuery>,
) -> Result<Json<Vec<Status>>, HttpError> {
    let statuses = state
        .core
        .statuses()
        .for_project(&slug, query.limit)
        .await?;
    Ok(Json(statuses))
}
