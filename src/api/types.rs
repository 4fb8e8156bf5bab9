//! API request/response types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Root
// ============================================================================

/// Static welcome response for the root endpoint
#[derive(Serialize, Clone)]
pub struct RootResponse {
    pub message: String,
    pub built_by: String,
    pub github_repo: String,
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check response
#[derive(Serialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

// ============================================================================
// Classify API
// ============================================================================

/// Query parameters for the classify endpoint
#[derive(Deserialize)]
pub struct ClassifyParams {
    /// Raw value of the `number` query parameter. Kept as a string so a
    /// failed parse can be echoed back in the 400 body.
    pub number: Option<String>,
}

/// Full classification of a single integer
#[derive(Serialize)]
pub struct ClassifyResponse {
    /// The parsed number
    pub number: i64,

    /// Whether the number is prime
    pub is_prime: bool,

    /// Whether the number equals the sum of its proper divisors
    pub is_perfect: bool,

    /// Tags in tested order: "armstrong", "perfect", then "even"/"odd"
    pub properties: Vec<String>,

    /// Sum of decimal digits of the absolute value
    pub digit_sum: i64,

    /// Trivia from the numbers service; empty when unavailable
    pub fun_fact: String,
}
