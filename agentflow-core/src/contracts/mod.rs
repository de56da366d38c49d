//! Typed views of every payload that crosses a service boundary.
//!
//! Each contract pairs a serde type with a JSON Schema so callers get one
//! validation story: structural checks first, then typed decoding with
//! documented defaults, then domain refinements.

pub mod image;
pub mod prompt;
pub mod scrape;

pub use image::{
    DEFAULT_IMAGE_NAME, DEFAULT_MIME_TYPE, GeneratedImage, ImageOptions, ImageRequest,
    ImageWebhookResponse, WebhookMeta,
};
pub use prompt::{PROMPT_COUNT, PromptList, TopicRequest};
pub use scrape::{DEFAULT_SUMMARY, DEFAULT_TITLE, PageLink, ScrapeRequest, ScrapeResult};
