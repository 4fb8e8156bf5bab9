//! Number Classifier: HTTP API that classifies integers.
//!
//! Reports whether a number is prime, perfect, or an Armstrong number,
//! its parity and digit sum, and a fun fact fetched from a numbers
//! trivia service.

pub mod api;
pub mod classifier;
pub mod services;

// Re-exportar tipos principales
pub use api::handlers::{AppState, SharedState};
pub use api::routes::create_router;
pub use classifier::{digit_sum, is_armstrong, is_perfect, is_prime};
pub use services::config::FactServiceConfig;
pub use services::facts::{create_provider, FactProvider, MockFactProvider, NumbersApiProvider};
