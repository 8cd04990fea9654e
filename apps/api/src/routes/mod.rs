pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::errors::AppError;
use crate::letter::handlers as letter;
use crate::quality::handlers as quality;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Quality API
        .route("/api/v1/quality/score", post(quality::handle_quality_score))
        .route("/api/v1/quality/analyze", post(quality::handle_analyze))
        .route(
            "/api/v1/quality/suggestion",
            post(quality::handle_suggestion),
        )
        // Wizard steps
        .route(
            "/api/v1/steps/:step/complete",
            post(quality::handle_step_complete),
        )
        .route(
            "/api/v1/steps/progress",
            post(quality::handle_step_progress),
        )
        // Letter API
        .route("/api/v1/letter", post(letter::handle_assemble_letter))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(state)
}
