//! Client for the image-generation webhook.

use agentflow_core::config::AppConfig;
use agentflow_core::contracts::{GeneratedImage, ImageOptions, ImageRequest, ImageWebhookResponse};
use agentflow_core::schema::validate_contract;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::http::RetryingClient;
use crate::retry::RetryPolicy;

/// Turns a text prompt into a browser-ready `data:` URI via the configured
/// webhook.
///
/// The webhook address comes from configuration and must start with `http`.
/// Replies are contract-validated before any field is trusted, so callers
/// never see raw upstream text in an error.
#[derive(Debug, Clone)]
pub struct ImageClient {
    client: RetryingClient,
    webhook_url: Option<String>,
}

impl ImageClient {
    /// Build a client with the default retry policy (2 retries, 1s base
    /// delay, 20s per-attempt deadline).
    pub fn new(config: &AppConfig) -> Self {
        Self::with_policy(config, RetryPolicy::default())
    }

    /// Build a client with an explicit retry policy.
    pub fn with_policy(config: &AppConfig, policy: RetryPolicy) -> Self {
        Self {
            client: RetryingClient::new(policy),
            webhook_url: config.webhook_url().map(str::to_string),
        }
    }

    fn configured_url(&self) -> Result<&str> {
        match self.webhook_url.as_deref() {
            Some(url) if url.starts_with("http") => Ok(url),
            _ => Err(ClientError::configuration(
                "image webhook URL is not configured correctly",
            )),
        }
    }

    /// Generate an image for `prompt`.
    ///
    /// The prompt is validated before anything touches the network; the
    /// webhook reply is validated before the data URI is assembled.
    pub async fn generate(&self, prompt: &str, options: ImageOptions) -> Result<GeneratedImage> {
        let request = ImageRequest::new(prompt, options)?;
        let url = self.configured_url()?;
        let payload = serde_json::to_value(&request)
            .map_err(|err| ClientError::internal(err.to_string()))?;

        let response = self.client.post_json(url, &payload).await?;
        let body = response.json()?;
        let webhook: ImageWebhookResponse = validate_contract(&body)?;

        if let Some(meta) = &webhook.meta {
            debug!(
                job_id = meta.job_id.as_deref(),
                duration_ms = meta.duration_ms,
                "webhook metadata"
            );
        }

        Ok(GeneratedImage::from_webhook(&webhook))
    }
}
