//! The prompt suggestion flow.

use std::fmt;
use std::sync::Arc;

use agentflow_core::config::AppConfig;
use agentflow_core::contracts::{PROMPT_COUNT, PromptList, TopicRequest};
use agentflow_core::schema::validate_contract;
use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::model::{GenAiModel, PromptModel};

/// Framing under which every suggestion request runs.
pub const SYSTEM_PROMPT: &str = "You are an AI prompt generator. Your job is to generate a \
     series of prompts based on a topic that a user provides to you.";

/// Expands a user topic into exactly [`PROMPT_COUNT`] prompts.
///
/// The reply must be a JSON object `{"prompts": [...]}`; Markdown code
/// fences around it are tolerated and stripped. Prompts come back in
/// generation order, duplicates included.
pub struct PromptGenerator {
    model: Arc<dyn PromptModel>,
}

impl fmt::Debug for PromptGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromptGenerator")
            .field("model", &"dyn PromptModel")
            .finish()
    }
}

impl PromptGenerator {
    /// Build a generator over the configured genai model.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_model(Arc::new(GenAiModel::from_config(config)))
    }

    /// Build a generator over any model implementation.
    pub fn with_model(model: Arc<dyn PromptModel>) -> Self {
        Self { model }
    }

    /// Suggest prompts for `topic`.
    pub async fn suggest(&self, topic: &str) -> Result<Vec<String>> {
        let request = TopicRequest::new(topic)?;
        let instruction = render_instruction(&request.topic);

        let reply = self.model.complete(SYSTEM_PROMPT, &instruction).await?;
        let cleaned = strip_code_fence(&reply);
        let value: Value = serde_json::from_str(cleaned)?;
        let list: PromptList = validate_contract(&value)?;

        info!(topic = %request.topic, count = list.prompts.len(), "prompts generated");
        Ok(list.prompts)
    }
}

fn render_instruction(topic: &str) -> String {
    format!(
        "Generate {PROMPT_COUNT} different prompts based on the following topic:\n\n\
         {topic}\n\n\
         Reply with a JSON object of the form {{\"prompts\": [\"...\"]}} and nothing else."
    )
}

/// Strip a surrounding Markdown code fence, tolerating a `json` language tag.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::PromptError;

    struct ScriptedModel {
        reply: String,
        calls: AtomicUsize,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedModel {
        fn replying(reply: impl Into<String>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.into(),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl PromptModel for ScriptedModel {
        async fn complete(&self, system: &str, user: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));
            Ok(self.reply.clone())
        }
    }

    fn five_prompts() -> serde_json::Value {
        json!({"prompts": ["p1", "p2", "p3", "p4", "p5"]})
    }

    #[tokio::test]
    async fn test_suggest_returns_prompts_in_order() {
        let model = ScriptedModel::replying(five_prompts().to_string());
        let generator = PromptGenerator::with_model(model.clone());

        let prompts = generator.suggest("rust memory safety").await.unwrap();

        assert_eq!(prompts, ["p1", "p2", "p3", "p4", "p5"]);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);

        let seen = model.seen.lock().unwrap();
        let (system, user) = &seen[0];
        assert_eq!(system, SYSTEM_PROMPT);
        assert!(user.contains("rust memory safety"));
        assert!(user.contains("Generate 5 different prompts"));
    }

    #[tokio::test]
    async fn test_fenced_reply_is_cleaned() {
        let reply = format!("```json\n{}\n```", five_prompts());
        let model = ScriptedModel::replying(reply);
        let generator = PromptGenerator::with_model(model);

        let prompts = generator.suggest("space travel").await.unwrap();
        assert_eq!(prompts.len(), 5);
    }

    #[tokio::test]
    async fn test_wrong_count_rejected() {
        let model = ScriptedModel::replying(json!({"prompts": ["only", "three", "here"]}).to_string());
        let generator = PromptGenerator::with_model(model);

        let err = generator.suggest("space travel").await.unwrap_err();
        assert!(matches!(err, PromptError::InvalidResponse { .. }));
        assert!(err.field_errors().unwrap().contains("prompts"));
    }

    #[tokio::test]
    async fn test_invalid_topic_never_calls_model() {
        let model = ScriptedModel::replying(five_prompts().to_string());
        let generator = PromptGenerator::with_model(model.clone());

        let err = generator.suggest("a").await.unwrap_err();

        assert!(err.is_user_error());
        assert_eq!(
            err.field_errors().unwrap().messages_for("topic").unwrap(),
            ["Topic must be at least 2 characters long."]
        );
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unparseable_reply_is_serialization_error() {
        let model = ScriptedModel::replying("here are your prompts!");
        let generator = PromptGenerator::with_model(model);

        let err = generator.suggest("space travel").await.unwrap_err();
        assert!(matches!(err, PromptError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_duplicates_are_preserved() {
        let model =
            ScriptedModel::replying(json!({"prompts": ["p", "p", "p", "p", "p"]}).to_string());
        let generator = PromptGenerator::with_model(model);

        let prompts = generator.suggest("repetition").await.unwrap();
        assert_eq!(prompts, ["p", "p", "p", "p", "p"]);
    }

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("  {}  "), "{}");
    }
}
