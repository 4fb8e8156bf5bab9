//! API request handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, info};

use crate::classifier::{digit_sum, is_armstrong, is_perfect, is_prime};
use crate::services::facts::FactProvider;

use super::error::{ApiError, ApiResult};
use super::types::*;

/// Application state shared across handlers
pub struct AppState {
    /// Fun-fact provider
    pub facts: Box<dyn FactProvider>,
}

/// Thread-safe shared state
pub type SharedState = Arc<AppState>;

// ============================================================================
// Root Handler
// ============================================================================

/// Static welcome endpoint
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the Number Classifier API!".to_string(),
        built_by: "Olaleye Obidiya(Onyx_Oceanview)".to_string(),
        github_repo: "https://github.com/onyx093/hng12_stage1_numbers_api".to_string(),
    })
}

// ============================================================================
// Health Check Handler
// ============================================================================

/// Health check endpoint
///
/// The service is stateless and the fact source is optional, so health is
/// always "healthy" as long as the process answers.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "number-classifier".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Classify Handler
// ============================================================================

/// Classify a number: primality, perfection, Armstrong-ness, parity,
/// digit sum, and an optional fun fact.
pub async fn classify_number(
    State(state): State<SharedState>,
    Query(params): Query<ClassifyParams>,
) -> ApiResult<Json<ClassifyResponse>> {
    let start = Instant::now();

    // A missing parameter follows the same 400 path as a malformed one.
    let raw = params.number.unwrap_or_default();

    let num: i64 = raw
        .parse()
        .map_err(|_| ApiError::InvalidNumber(raw.clone()))?;

    let is_prime = is_prime(num);
    let is_perfect = is_perfect(num);
    let digit_sum = digit_sum(num);

    // Tags in tested order: armstrong, perfect, then parity.
    let mut properties = Vec::new();
    if num >= 0 && is_armstrong(num) {
        properties.push("armstrong".to_string());
    }
    if num > 0 && is_perfect {
        properties.push("perfect".to_string());
    }
    properties.push(if num % 2 == 0 { "even" } else { "odd" }.to_string());

    // Best-effort enrichment: any failure degrades to an empty fact.
    let fun_fact = match state.facts.fact_for(num).await {
        Ok(text) => text,
        Err(e) => {
            debug!("Fun fact unavailable for {}: {}", num, e);
            String::new()
        }
    };

    info!(
        "Classified {} ({:?}) in {}ms",
        num,
        properties,
        start.elapsed().as_millis()
    );

    Ok(Json(ClassifyResponse {
        number: num,
        is_prime,
        is_perfect,
        properties,
        digit_sum,
        fun_fact,
    }))
}
