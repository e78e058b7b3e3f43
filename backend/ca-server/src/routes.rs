use crate::{AppState, action_plan, analyze_profile, generate, health, recommend};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Model endpoints
        .route("/generate", post(generate))
        .route("/recommend", post(recommend))
        .route("/analyze-profile", post(analyze_profile))
        .route("/action-plan", post(action_plan))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // The SPA may be served from another origin in development
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
