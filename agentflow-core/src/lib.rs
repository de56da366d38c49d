//! # AgentFlow Core
//!
//! Shared contracts, validation, and configuration for the AgentFlow
//! adapters.
//!
//! ## Core Concepts
//!
//! - **Contract**: A serde type paired with a JSON Schema describing one
//!   wire payload
//! - **FieldErrors**: Per-field complaints collected during validation
//! - **AppConfig**: Environment-derived addresses for the upstream services
//!
//! ## Quick Start
//!
//! ```rust
//! use agentflow_core::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let raw = serde_json::json!({ "url": "https://example.com", "pages": 3 });
//! let request: ScrapeRequest = validate_contract(&raw)?;
//! assert_eq!(request.pages, 3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod schema;

/// Convenient re-exports for common use.
pub mod prelude {
    pub use serde::{Deserialize, Serialize};
    pub use serde_json;

    pub use crate::{
        config::AppConfig,
        contracts::{
            GeneratedImage, ImageOptions, ImageRequest, ImageWebhookResponse, PageLink,
            PromptList, ScrapeRequest, ScrapeResult, TopicRequest,
        },
        error::{CoreError, Result},
        schema::{Contract, FieldErrors, validate_contract},
    };
}
