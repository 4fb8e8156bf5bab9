//! Service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the fun-fact provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactServiceConfig {
    /// Provider name (e.g., "numbersapi", "mock").
    pub provider: String,

    /// Base URL for the trivia API.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for FactServiceConfig {
    fn default() -> Self {
        Self {
            provider: "numbersapi".to_string(),
            base_url: "http://numbersapi.com".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl FactServiceConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Builder: set timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("FACTS_PROVIDER") {
            config.provider = val;
        }

        if let Ok(val) = std::env::var("FACTS_BASE_URL") {
            config.base_url = val;
        }

        if let Ok(val) = std::env::var("FACTS_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }

        config
    }
}
