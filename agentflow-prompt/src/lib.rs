//! AgentFlow Prompt - LLM-backed prompt suggestion
//!
//! This crate expands a short user topic into a fixed set of usable
//! prompts. It includes:
//!
//! - A model seam so flows run against any chat-capable backend
//! - A genai adapter picking the model name from configuration
//! - Reply cleanup and strict validation of the model's JSON output
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use agentflow_prompt::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::from_env();
//!     let generator = PromptGenerator::from_config(&config);
//!
//!     for prompt in generator.suggest("sourdough baking").await? {
//!         println!("- {prompt}");
//!     }
//!     Ok(())
//! }
//! ```

/// Error types for prompt operations.
pub mod error;
/// The suggestion flow.
pub mod flow;
/// Model seam and genai adapter.
pub mod model;

// Re-export commonly used types
pub use error::{PromptError, Result};
pub use flow::{PromptGenerator, SYSTEM_PROMPT};
pub use model::{GenAiModel, PromptModel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use agentflow_core::{config::AppConfig, contracts::PROMPT_COUNT};
    pub use async_trait::async_trait;

    pub use crate::{
        error::{PromptError, Result},
        flow::PromptGenerator,
        model::{GenAiModel, PromptModel},
    };
}
