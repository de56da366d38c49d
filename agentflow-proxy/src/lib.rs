//! AgentFlow Proxy - the scrape endpoint behind the UI
//!
//! This crate is the server side of `/api/scrape`: it validates request
//! bodies, forwards them to the configured scraping service, and maps
//! every outcome to a definite HTTP reply. It includes:
//!
//! - A framework-neutral response type carrying status, CORS headers, and body
//! - The endpoint state machine with its fixed error vocabulary
//! - A 30s upstream deadline with no retries, so callers always get an answer
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use agentflow_proxy::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::from_env();
//!     let proxy = ScrapeProxy::new(&config);
//!
//!     let body = br#"{"url": "https://example.com"}"#;
//!     let response = proxy.handle(body).await;
//!     println!("{} {:?}", response.status(), response.body());
//! }
//! ```

/// Endpoint error vocabulary.
pub mod error;
/// The scrape endpoint.
pub mod handler;
/// Framework-neutral response surface.
pub mod response;

// Re-export commonly used types
pub use error::ProxyError;
pub use handler::{ScrapeProxy, UPSTREAM_TIMEOUT};
pub use response::{ApiResponse, CORS_HEADERS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use agentflow_core::{config::AppConfig, contracts::{ScrapeRequest, ScrapeResult}};

    pub use crate::{
        error::ProxyError,
        handler::ScrapeProxy,
        response::{ApiResponse, CORS_HEADERS},
    };
}
