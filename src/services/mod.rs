//! Business services for the number classifier.
//!
//! This module provides:
//! - **Facts**: Provider trait for external number trivia
//! - **Configuration**: Service-level settings
//!
//! # Facts
//!
//! Fetch a fun fact for a number, best-effort:
//!
//! ```ignore
//! use number_classifier::services::{create_provider, FactServiceConfig};
//!
//! let provider = create_provider(FactServiceConfig::from_env());
//! let fact = provider.fact_for(371).await.unwrap_or_default();
//! ```

pub mod config;
pub mod facts;

// Re-exports
pub use config::FactServiceConfig;
pub use facts::{create_provider, FactProvider, MockFactProvider, NumbersApiProvider};
