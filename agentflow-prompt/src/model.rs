//! Seam between the suggestion flow and chat-capable models.

use std::fmt;

use agentflow_core::config::AppConfig;
use async_trait::async_trait;
use genai::chat::{ChatMessage, ChatRequest};

use crate::error::{PromptError, Result};

/// One chat completion: a system framing plus a single user message.
///
/// The flow depends on this trait rather than on a provider client, so
/// tests script replies without touching a network.
#[async_trait]
pub trait PromptModel: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Provider-backed model using genai.
///
/// Provider selection and credentials follow genai's environment
/// conventions; only the model name is ours to pick.
#[derive(Clone)]
pub struct GenAiModel {
    client: genai::Client,
    model: String,
}

impl GenAiModel {
    /// Create an adapter for the named model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: genai::Client::default(),
            model: model.into(),
        }
    }

    /// Create an adapter for the configured model name.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.prompt_model())
    }

    /// The model name completions run against.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Debug for GenAiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenAiModel")
            .field("model", &self.model)
            .field("client", &"genai::Client")
            .finish()
    }
}

#[async_trait]
impl PromptModel for GenAiModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest::new(vec![
            ChatMessage::system(system),
            ChatMessage::user(user),
        ]);
        let response = self.client.exec_chat(&self.model, request, None).await?;
        response
            .content_text_as_str()
            .map(str::to_string)
            .ok_or_else(|| PromptError::model("model returned no text content"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_model_name_from_config() {
        let config = AppConfig::new().with_prompt_model("gpt-4o");
        assert_eq!(GenAiModel::from_config(&config).model(), "gpt-4o");
    }

    #[test]
    fn test_default_model_name() {
        let config = AppConfig::new();
        assert_eq!(GenAiModel::from_config(&config).model(), "gpt-4o-mini");
    }
}
