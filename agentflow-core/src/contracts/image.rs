//! Wire contracts for the image-generation webhook.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::schema::{Contract, FieldErrors};

/// MIME type assumed when the webhook omits one.
pub const DEFAULT_MIME_TYPE: &str = "image/png";
/// Display name assumed when the webhook omits one.
pub const DEFAULT_IMAGE_NAME: &str = "generated-image";

const PROMPT_MIN_CHARS: usize = 3;
const PROMPT_MAX_CHARS: usize = 1000;

/// Optional generation knobs forwarded verbatim to the webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Payload posted to the image webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub options: ImageOptions,
}

impl ImageRequest {
    /// Build a request, rejecting prompts outside the accepted length range.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn new(prompt: impl Into<String>, options: ImageOptions) -> Result<Self, FieldErrors> {
        let prompt = prompt.into();
        let chars = prompt.chars().count();
        if chars < PROMPT_MIN_CHARS {
            return Err(FieldErrors::single(
                "prompt",
                "Prompt must be at least 3 characters long.",
            ));
        }
        if chars > PROMPT_MAX_CHARS {
            return Err(FieldErrors::single(
                "prompt",
                "Prompt must be 1000 characters or less.",
            ));
        }
        Ok(Self { prompt, options })
    }
}

/// Diagnostic metadata some webhook deployments attach to responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WebhookMeta {
    #[serde(default, rename = "jobId")]
    pub job_id: Option<String>,
    #[serde(default)]
    pub duration_ms: Option<f64>,
}

/// The webhook reply, validated before any field is trusted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageWebhookResponse {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub meta: Option<WebhookMeta>,
}

impl ImageWebhookResponse {
    /// The declared MIME type, falling back to [`DEFAULT_MIME_TYPE`].
    ///
    /// An empty string counts as absent.
    pub fn mime_type_or_default(&self) -> &str {
        match self.mime_type.as_deref() {
            Some(mime) if !mime.is_empty() => mime,
            _ => DEFAULT_MIME_TYPE,
        }
    }

    /// The declared display name, falling back to [`DEFAULT_IMAGE_NAME`].
    pub fn name_or_default(&self) -> &str {
        match self.image_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_IMAGE_NAME,
        }
    }
}

impl Contract for ImageWebhookResponse {
    const NAME: &'static str = "image webhook response";

    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["imageUrl"],
            "properties": {
                "imageUrl": { "type": "string" },
                "mime_type": { "type": "string" },
                "image_name": { "type": "string" },
                "meta": {
                    "type": "object",
                    "properties": {
                        "jobId": { "type": "string" },
                        "duration_ms": { "type": "number" }
                    }
                }
            }
        })
    }

    fn refine(&self, errors: &mut FieldErrors) {
        if self.image_url.trim().is_empty() {
            errors.push("imageUrl", "image payload is empty");
        }
    }
}

/// A browser-ready image derived from a validated webhook reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    /// A `data:` URI embedding the base64 payload.
    pub src: String,
    /// Display name for downloads.
    pub name: String,
}

impl GeneratedImage {
    /// Assemble the data URI from a validated webhook reply.
    ///
    /// Surrounding whitespace on the payload is stripped before embedding.
    pub fn from_webhook(response: &ImageWebhookResponse) -> Self {
        Self {
            src: format!(
                "data:{};base64,{}",
                response.mime_type_or_default(),
                response.image_url.trim()
            ),
            name: response.name_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schema::validate_contract;

    #[test]
    fn test_request_serializes_prompt_and_options() {
        let request = ImageRequest::new(
            "a watercolor fox",
            ImageOptions {
                style: Some("watercolor".into()),
                size: None,
            },
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "prompt": "a watercolor fox",
                "options": {"style": "watercolor"}
            })
        );
    }

    #[test]
    fn test_request_rejects_short_prompt() {
        let errors = ImageRequest::new("hi", ImageOptions::default()).unwrap_err();
        assert_eq!(
            errors.messages_for("prompt").unwrap(),
            ["Prompt must be at least 3 characters long."]
        );
    }

    #[test]
    fn test_request_rejects_long_prompt() {
        let errors = ImageRequest::new("p".repeat(1001), ImageOptions::default()).unwrap_err();
        assert_eq!(
            errors.messages_for("prompt").unwrap(),
            ["Prompt must be 1000 characters or less."]
        );
    }

    #[test]
    fn test_request_counts_characters_not_bytes() {
        // Three characters, nine bytes.
        assert!(ImageRequest::new("橙色猫", ImageOptions::default()).is_ok());
    }

    #[test]
    fn test_response_requires_image_url() {
        let err =
            validate_contract::<ImageWebhookResponse>(&json!({"mime_type": "image/png"}))
                .unwrap_err();
        assert!(err.field_errors().unwrap().contains("imageUrl"));
    }

    #[test]
    fn test_response_rejects_blank_payload() {
        let err = validate_contract::<ImageWebhookResponse>(&json!({"imageUrl": "   "}))
            .unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().messages_for("imageUrl").unwrap(),
            ["image payload is empty"]
        );
    }

    #[test]
    fn test_defaults_cover_absent_and_empty_fields() {
        let response: ImageWebhookResponse =
            validate_contract(&json!({"imageUrl": "aGk=", "mime_type": ""})).unwrap();
        assert_eq!(response.mime_type_or_default(), DEFAULT_MIME_TYPE);
        assert_eq!(response.name_or_default(), DEFAULT_IMAGE_NAME);
    }

    #[test]
    fn test_generated_image_embeds_trimmed_payload() {
        let response: ImageWebhookResponse = validate_contract(&json!({
            "imageUrl": "  aGVsbG8=\n",
            "mime_type": "image/jpeg",
            "image_name": "fox.jpg"
        }))
        .unwrap();

        let image = GeneratedImage::from_webhook(&response);
        assert_eq!(image.src, "data:image/jpeg;base64,aGVsbG8=");
        assert_eq!(image.name, "fox.jpg");
    }

    #[test]
    fn test_meta_is_optional_and_partial() {
        let response: ImageWebhookResponse = validate_contract(&json!({
            "imageUrl": "aGk=",
            "meta": {"jobId": "job-7"}
        }))
        .unwrap();

        let meta = response.meta.unwrap();
        assert_eq!(meta.job_id.as_deref(), Some("job-7"));
        assert_eq!(meta.duration_ms, None);
    }
}
