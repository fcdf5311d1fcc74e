use crate::{
    AppState, delete_project, get_project, health, list_projects, submit_project, upload_project,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
///
/// `max_body_bytes` caps request bodies; multipart submissions carry raw
/// image bytes and usually need more than axum's 2 MiB default.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        // Projects
        .route("/api/projects", get(list_projects).post(submit_project))
        .route("/api/projects/upload", post(upload_project))
        .route("/api/projects/{id}", get(get_project).delete(delete_project))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
