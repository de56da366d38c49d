//! AgentFlow Client - validated HTTP clients for the webhook services
//!
//! This crate wraps the upstream webhook endpoints in clients that validate
//! both directions of every exchange. It includes:
//!
//! - A retrying JSON transport with per-attempt deadlines and linear backoff
//! - An image-generation client producing browser-ready `data:` URIs
//! - A scrape client for the `/api/scrape` endpoint
//! - Error classification separating caller mistakes from upstream failures
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use agentflow_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::from_env();
//!
//!     let images = ImageClient::new(&config);
//!     let image = images
//!         .generate("a lighthouse at dusk", ImageOptions::default())
//!         .await?;
//!     println!("{} -> {} bytes of data URI", image.name, image.src.len());
//!
//!     Ok(())
//! }
//! ```

/// Error types for client operations.
pub mod error;
/// Retrying JSON transport.
pub mod http;
/// Image-generation webhook client.
pub mod image;
/// Retry pacing policy.
pub mod retry;
/// Scrape endpoint client.
pub mod scrape;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use http::{RetryingClient, UpstreamResponse, extract_error_message};
pub use image::ImageClient;
pub use retry::RetryPolicy;
pub use scrape::ScrapeClient;

/// Prelude module for convenient imports
pub mod prelude {
    pub use agentflow_core::{
        config::AppConfig,
        contracts::{GeneratedImage, ImageOptions, ImageRequest, ScrapeRequest, ScrapeResult},
    };

    pub use crate::{
        error::{ClientError, Result},
        http::{RetryingClient, UpstreamResponse},
        image::ImageClient,
        retry::RetryPolicy,
        scrape::ScrapeClient,
    };
}
