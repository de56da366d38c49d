//! The `/api/scrape` endpoint.

use std::time::Duration;

use agentflow_client::{ClientError, RetryPolicy, RetryingClient};
use agentflow_core::config::AppConfig;
use agentflow_core::contracts::{ScrapeRequest, ScrapeResult};
use agentflow_core::error::CoreError;
use agentflow_core::schema::validate_contract;
use serde_json::{Value, json};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ProxyError;
use crate::response::ApiResponse;

/// Deadline for the forwarded upstream call. There are no retries on this
/// path; the caller gets a definitive answer within one deadline.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Validates scrape requests and forwards them to the configured service.
///
/// `handle` never fails: every outcome, success or not, becomes an
/// [`ApiResponse`] with the CORS headers attached.
#[derive(Debug, Clone)]
pub struct ScrapeProxy {
    client: RetryingClient,
    proxy_base: Option<String>,
    timeout: Duration,
}

impl ScrapeProxy {
    /// Build a proxy with the standard 30s upstream deadline.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_timeout(config, UPSTREAM_TIMEOUT)
    }

    /// Build a proxy with an explicit upstream deadline.
    pub fn with_timeout(config: &AppConfig, timeout: Duration) -> Self {
        Self {
            client: RetryingClient::new(RetryPolicy::single_attempt(timeout)),
            proxy_base: config.proxy_base().map(str::to_string),
            timeout,
        }
    }

    /// Answer an OPTIONS preflight.
    pub fn preflight(&self) -> ApiResponse {
        ApiResponse::preflight()
    }

    /// Handle one POST body.
    pub async fn handle(&self, body: &[u8]) -> ApiResponse {
        let request_id = Uuid::new_v4();
        match self.scrape(body).await {
            Ok(result) => {
                info!(%request_id, "scrape succeeded");
                ApiResponse::ok(result)
            }
            Err(err) => {
                warn!(
                    %request_id,
                    status = err.status().as_u16(),
                    error = %err,
                    "scrape request failed"
                );
                err.to_response()
            }
        }
    }

    async fn scrape(&self, body: &[u8]) -> Result<Value, ProxyError> {
        // Malformed JSON degrades to an empty object so validation can
        // name the missing fields instead.
        let raw: Value = serde_json::from_slice(body).unwrap_or_else(|_| json!({}));
        let request: ScrapeRequest = validate_contract(&raw).map_err(invalid_body)?;

        let base = self.proxy_base.as_deref().ok_or(ProxyError::NotConfigured)?;
        let endpoint = format!("{}/api/scrape", base.trim_end_matches('/'));
        let payload = serde_json::to_value(&request).map_err(scrape_failed)?;

        let response = self
            .client
            .post_json(&endpoint, &payload)
            .await
            .map_err(|err| self.map_client_error(err))?;

        let reply = response.json().map_err(scrape_failed)?;
        let result: ScrapeResult = validate_contract(&reply).map_err(scrape_failed)?;
        serde_json::to_value(&result).map_err(scrape_failed)
    }

    fn map_client_error(&self, err: ClientError) -> ProxyError {
        match err {
            ClientError::Timeout(_) => ProxyError::Timeout {
                seconds: self.timeout.as_secs(),
            },
            ClientError::Network(detail) => ProxyError::Unreachable { detail },
            ClientError::UpstreamStatus { status, message } => {
                ProxyError::Upstream { status, message }
            }
            other => ProxyError::ScrapeFailed {
                detail: other.to_string(),
            },
        }
    }
}

fn invalid_body(err: CoreError) -> ProxyError {
    match err {
        CoreError::SchemaMismatch { errors, .. } => ProxyError::InvalidBody { errors },
        other => ProxyError::ScrapeFailed {
            detail: other.to_string(),
        },
    }
}

fn scrape_failed(err: impl std::fmt::Display) -> ProxyError {
    ProxyError::ScrapeFailed {
        detail: err.to_string(),
    }
}
