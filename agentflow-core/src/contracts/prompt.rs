//! Wire contracts for prompt suggestion.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::schema::{Contract, FieldErrors};

/// Number of prompts a suggestion run must produce.
pub const PROMPT_COUNT: usize = 5;

const TOPIC_MIN_CHARS: usize = 2;
const TOPIC_MAX_CHARS: usize = 100;

/// A user topic to expand into prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRequest {
    pub topic: String,
}

impl TopicRequest {
    /// Build a request, rejecting topics outside the accepted length range.
    pub fn new(topic: impl Into<String>) -> Result<Self, FieldErrors> {
        let topic = topic.into();
        let chars = topic.chars().count();
        if chars < TOPIC_MIN_CHARS {
            return Err(FieldErrors::single(
                "topic",
                "Topic must be at least 2 characters long.",
            ));
        }
        if chars > TOPIC_MAX_CHARS {
            return Err(FieldErrors::single(
                "topic",
                "Topic must be 100 characters or less.",
            ));
        }
        Ok(Self { topic })
    }
}

/// The model's reply: exactly [`PROMPT_COUNT`] prompt strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptList {
    pub prompts: Vec<String>,
}

impl Contract for PromptList {
    const NAME: &'static str = "prompt list";

    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["prompts"],
            "properties": {
                "prompts": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": PROMPT_COUNT,
                    "maxItems": PROMPT_COUNT
                }
            }
        })
    }
}
