use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/api/resumes/upload", post(handlers::resumes::upload))
        .route("/api/resumes/analyze", post(handlers::resumes::analyze))
        .route("/api/resumes/summary", post(handlers::assist::summary))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        // resumes arrive as multipart files capped at 10MB in the handler;
        // axum's default body limit sits below that
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
        .with_state(state);

    Ok(app)
}
