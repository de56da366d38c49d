//! Process configuration for AgentFlow adapters.
//!
//! Upstream addresses come from the environment once at startup and travel in
//! an immutable [`AppConfig`] handed to each adapter. Nothing reads the
//! environment after construction, so tests and embedders can build
//! configurations directly.

use tracing::debug;

/// Environment variable naming the image-generation webhook address.
pub const ENV_WEBHOOK_URL: &str = "N8N_WEBHOOK_URL";
/// Public-prefixed fallback for [`ENV_WEBHOOK_URL`], kept for existing
/// deployments that still export it.
pub const ENV_WEBHOOK_URL_PUBLIC: &str = "NEXT_PUBLIC_N8N_WEBHOOK_URL";
/// Environment variable naming the scrape service base address.
pub const ENV_PROXY_BASE: &str = "MCP_PROXY_BASE";
/// Environment variable naming the base address of this service's own API.
pub const ENV_API_BASE: &str = "NEXT_PUBLIC_API_BASE";
/// Environment variable overriding the prompt model name.
pub const ENV_PROMPT_MODEL: &str = "PROMPT_MODEL";

/// Model used for prompt suggestions unless configured otherwise.
pub const DEFAULT_PROMPT_MODEL: &str = "gpt-4o-mini";

/// Immutable application configuration, read once at process start.
///
/// Empty and whitespace-only values count as unset; stored values are
/// trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    n8n_webhook_url: Option<String>,
    mcp_proxy_base: Option<String>,
    api_base: Option<String>,
    prompt_model: Option<String>,
}

impl AppConfig {
    /// Create an empty configuration with everything unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a lookup function.
    ///
    /// [`AppConfig::from_env`] goes through here; tests can substitute a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).and_then(non_empty);
        let config = Self {
            n8n_webhook_url: get(ENV_WEBHOOK_URL).or_else(|| get(ENV_WEBHOOK_URL_PUBLIC)),
            mcp_proxy_base: get(ENV_PROXY_BASE),
            api_base: get(ENV_API_BASE),
            prompt_model: get(ENV_PROMPT_MODEL),
        };
        debug!(
            webhook = config.n8n_webhook_url.is_some(),
            proxy = config.mcp_proxy_base.is_some(),
            api = config.api_base.is_some(),
            "configuration loaded"
        );
        config
    }

    /// Set the image-generation webhook address.
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.n8n_webhook_url = non_empty(url.into());
        self
    }

    /// Set the scrape service base address.
    pub fn with_proxy_base(mut self, base: impl Into<String>) -> Self {
        self.mcp_proxy_base = non_empty(base.into());
        self
    }

    /// Set this service's own API base address.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = non_empty(base.into());
        self
    }

    /// Set the prompt model name.
    pub fn with_prompt_model(mut self, model: impl Into<String>) -> Self {
        self.prompt_model = non_empty(model.into());
        self
    }

    /// Image-generation webhook address, if configured.
    pub fn webhook_url(&self) -> Option<&str> {
        self.n8n_webhook_url.as_deref()
    }

    /// Scrape service base address, if configured.
    pub fn proxy_base(&self) -> Option<&str> {
        self.mcp_proxy_base.as_deref()
    }

    /// Own API base address, if configured.
    pub fn api_base(&self) -> Option<&str> {
        self.api_base.as_deref()
    }

    /// Prompt model name, falling back to [`DEFAULT_PROMPT_MODEL`].
    pub fn prompt_model(&self) -> &str {
        self.prompt_model.as_deref().unwrap_or(DEFAULT_PROMPT_MODEL)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
