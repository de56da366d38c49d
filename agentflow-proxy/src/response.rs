//! Framework-neutral response surface.
//!
//! The endpoint produces status, headers, and an optional JSON body; any
//! host framework can adapt those three values to its own response type.

use reqwest::StatusCode;
use serde_json::Value;

/// Header set attached to every reply, preflight included.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// One HTTP reply from the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: StatusCode,
    headers: Vec<(&'static str, &'static str)>,
    body: Option<Value>,
}

impl ApiResponse {
    /// A JSON reply with the CORS headers attached.
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            headers: CORS_HEADERS.to_vec(),
            body: Some(body),
        }
    }

    /// A 200 reply with a JSON body.
    pub fn ok(body: Value) -> Self {
        Self::json(StatusCode::OK, body)
    }

    /// The empty 200 answering an OPTIONS preflight.
    pub fn preflight() -> Self {
        Self {
            status: StatusCode::OK,
            headers: CORS_HEADERS.to_vec(),
            body: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &[(&'static str, &'static str)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Serialized body bytes, empty when there is no body.
    pub fn body_bytes(&self) -> Vec<u8> {
        self.body
            .as_ref()
            .map(|body| body.to_string().into_bytes())
            .unwrap_or_default()
    }
}
