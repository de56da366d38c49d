use agentflow_core::schema::FieldErrors;
use reqwest::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

use crate::response::ApiResponse;

/// Terminal states of one proxied scrape, each mapping to an HTTP reply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProxyError {
    #[error("Invalid request body.")]
    InvalidBody { errors: FieldErrors },

    #[error("Scraping service is not configured on the server.")]
    NotConfigured,

    #[error("MCP proxy responded {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Cannot reach MCP proxy: {detail}")]
    Unreachable { detail: String },

    #[error("Timeout communicating with MCP proxy ({seconds}s).")]
    Timeout { seconds: u64 },

    #[error("Failed to scrape the URL.")]
    ScrapeFailed { detail: String },
}

impl ProxyError {
    /// The HTTP status this state answers with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotConfigured | Self::ScrapeFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { .. } | Self::Unreachable { .. } => StatusCode::BAD_GATEWAY,
            Self::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// The JSON body this state answers with.
    pub fn body(&self) -> Value {
        match self {
            Self::InvalidBody { errors } => json!({
                "error": self.to_string(),
                "details": errors,
            }),
            Self::ScrapeFailed { detail } => json!({
                "error": self.to_string(),
                "details": detail,
            }),
            other => json!({ "error": other.to_string() }),
        }
    }

    /// The full HTTP reply for this state.
    pub fn to_response(&self) -> ApiResponse {
        ApiResponse::json(self.status(), self.body())
    }
}
