//! API route definitions.

use axum::{routing::get, Router};

use super::handlers::{self, SharedState};

/// Creates the API router with all routes configured
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // Static welcome
        .route("/", get(handlers::root))
        // Health check
        .route("/health", get(handlers::health_check))
        // Number classification
        .route("/api/classify-number", get(handlers::classify_number))
        // State
        .with_state(state)
}

/// Prints all available routes for logging
pub fn print_routes() {
    tracing::info!("Available API routes:");
    tracing::info!("  GET  /                     - Welcome message");
    tracing::info!("  GET  /health               - Health check");
    tracing::info!("  GET  /api/classify-number  - Classify an integer (?number=<int>)");
}
