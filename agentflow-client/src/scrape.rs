//! Front-end companion client for the scrape endpoint.

use std::time::Duration;

use agentflow_core::config::AppConfig;
use agentflow_core::contracts::{ScrapeRequest, ScrapeResult};
use agentflow_core::schema::validate_contract;

use crate::error::{ClientError, Result};
use crate::http::RetryingClient;
use crate::retry::RetryPolicy;

// Sits above the proxy's own 30s upstream deadline so the far end times
// out first and can answer with its 504 body.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(35);

/// Calls `POST {api_base}/api/scrape` and validates the reply.
///
/// By default a single attempt with a 35s deadline; the endpoint carries
/// its own retry story, so none is added here.
#[derive(Debug, Clone)]
pub struct ScrapeClient {
    client: RetryingClient,
    api_base: Option<String>,
}

impl ScrapeClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_policy(config, RetryPolicy::single_attempt(DEFAULT_TIMEOUT))
    }

    pub fn with_policy(config: &AppConfig, policy: RetryPolicy) -> Self {
        Self {
            client: RetryingClient::new(policy),
            api_base: config.api_base().map(str::to_string),
        }
    }

    fn endpoint(&self) -> Result<String> {
        match self.api_base.as_deref() {
            Some(base) => Ok(format!("{}/api/scrape", base.trim_end_matches('/'))),
            None => Err(ClientError::configuration(
                "API base address is not configured",
            )),
        }
    }

    /// Scrape `url` with every option at its default.
    pub async fn scrape(&self, url: impl Into<String>) -> Result<ScrapeResult> {
        self.scrape_with(&ScrapeRequest::new(url)).await
    }

    /// Scrape with explicit options.
    pub async fn scrape_with(&self, request: &ScrapeRequest) -> Result<ScrapeResult> {
        let endpoint = self.endpoint()?;
        let payload = serde_json::to_value(request)
            .map_err(|err| ClientError::internal(err.to_string()))?;

        let response = self.client.post_json(&endpoint, &payload).await?;
        let body = response.json()?;
        let result: ScrapeResult = validate_contract(&body)?;
        Ok(result)
    }
}
