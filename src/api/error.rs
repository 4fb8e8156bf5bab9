//! API error handling module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// The `number` query parameter did not parse as a base-10 integer.
    /// Carries the raw input so the error body can echo it back.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

/// Error body for a rejected classification request.
///
/// The contract is exactly `{"number": "<raw input>", "error": true}`.
#[derive(Serialize)]
pub struct InvalidNumberResponse {
    pub number: String,
    pub error: bool,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidNumber(raw) => {
                let body = InvalidNumberResponse {
                    number: raw,
                    error: true,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
