//! API module for the number classifier.
//!
//! This module provides the HTTP REST API built with Axum:
//! - `/` - Static welcome message
//! - `/health` - Health check endpoint
//! - `/api/classify-number` - Classify an integer

pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

// Re-exports
pub use error::{ApiError, ApiResult, InvalidNumberResponse};
pub use handlers::AppState;
pub use routes::{create_router, print_routes};
pub use types::*;
