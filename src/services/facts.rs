//! Fun-fact provider backed by a numbers trivia API.
//!
//! The provider is best-effort: the classify endpoint degrades to an empty
//! fact when the upstream call fails, so errors here never reach a client.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::config::FactServiceConfig;

/// Trait for fun-fact providers.
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Fetches a trivia string for the given number.
    async fn fact_for(&self, number: i64) -> Result<String>;

    /// Gets the provider name.
    fn provider_name(&self) -> &str;
}

/// Builds the provider named in the configuration.
pub fn create_provider(config: FactServiceConfig) -> Box<dyn FactProvider> {
    match config.provider.as_str() {
        "mock" => Box::new(MockFactProvider::new()),
        _ => Box::new(NumbersApiProvider::new(config)),
    }
}

// =============================================================================
// Numbers API Provider
// =============================================================================

/// Response body from the Numbers API in `?json` mode.
#[derive(Debug, Deserialize)]
struct NumbersApiResponse {
    #[serde(default)]
    text: Option<String>,
}

/// Provider that queries a numbersapi.com-style trivia endpoint.
pub struct NumbersApiProvider {
    client: Client,
    base_url: String,
}

impl NumbersApiProvider {
    /// Creates a new provider with a client bounded by the configured timeout.
    pub fn new(config: FactServiceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url,
        }
    }
}

#[async_trait]
impl FactProvider for NumbersApiProvider {
    async fn fact_for(&self, number: i64) -> Result<String> {
        let url = format!("{}/{}?json", self.base_url.trim_end_matches('/'), number);

        tracing::debug!("Numbers API URL: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| anyhow!("Numbers API request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Numbers API returned error status: {}",
                response.status()
            ));
        }

        let body: NumbersApiResponse = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse Numbers API response: {}", e))?;

        Ok(body.text.unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        "numbersapi"
    }
}

// =============================================================================
// Mock Provider
// =============================================================================

/// Mock fact provider for testing.
pub struct MockFactProvider {
    should_fail: bool,
}

impl MockFactProvider {
    /// Creates a new mock provider.
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    /// Creates a mock provider that always fails.
    pub fn failing() -> Self {
        Self { should_fail: true }
    }
}

impl Default for MockFactProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FactProvider for MockFactProvider {
    async fn fact_for(&self, number: i64) -> Result<String> {
        if self.should_fail {
            return Err(anyhow!("Mock fact provider configured to fail"));
        }

        Ok(format!("{} is a number the mock provider knows about.", number))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
