//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the services on `AppCore`.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AppContext;
use crate::error::{ErrorBody, REDACTED_MESSAGE};
use crate::handlers;
use crate::state::AppState;

/// Build all API routes without `/api` prefix (for nesting under /api).
///
/// Returns a router typed as `Router<AppState>` WITHOUT `.with_state()`
/// applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        // Projects API
        .route(
            "/projects",
            get(handlers::projects::list).post(handlers::projects::create),
        )
        .route("/projects/{slug}", get(handlers::projects::get))
        .route(
            "/projects/{slug}/statuses",
            get(handlers::projects::statuses),
        )
        // Users API
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route("/users/{slug}", get(handlers::users::get))
        .route("/users/{slug}/statuses", get(handlers::users::statuses))
        // Statuses API
        .route(
            "/statuses",
            get(handlers::statuses::timeline).post(handlers::statuses::post),
        )
        .route(
            "/statuses/{id}",
            get(handlers::statuses::get).delete(handlers::statuses::remove),
        )
}

/// Create the main Axum router with all API routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{slug}`, `{id}`
pub fn create_router(ctx: AppContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            redact_internal_errors,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

/// Replace the body of 500 responses unless the app runs in testing mode.
async fn redact_internal_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if state.config.testing || response.status() != StatusCode::INTERNAL_SERVER_ERROR {
        return response;
    }
    ErrorBody::response(
        StatusCode::INTERNAL_SERVER_ERROR,
        REDACTED_MESSAGE.to_string(),
    )
}
