//! Wire contracts for the scrape endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use crate::schema::{Contract, FieldErrors};

/// Fallback title when the scrape service reports none.
pub const DEFAULT_TITLE: &str = "No title found";
/// Fallback summary when the scrape service reports none.
pub const DEFAULT_SUMMARY: &str = "No summary available.";

/// A scrape request as accepted by `POST /api/scrape` and forwarded upstream.
///
/// Bounds are enforced, never clamped: `maxDepth` outside `[0, 2]` or
/// `pages` outside `[1, 10]` fail validation. The `url` must parse as an
/// absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    pub url: String,
    #[serde(default)]
    pub max_depth: u8,
    #[serde(default)]
    pub follow_links: bool,
    #[serde(default = "default_pages")]
    pub pages: u8,
    #[serde(default, rename = "mobile_view")]
    pub mobile_view: bool,
}

fn default_pages() -> u8 {
    1
}

impl ScrapeRequest {
    /// Build a request for `url` with every option at its default.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_depth: 0,
            follow_links: false,
            pages: 1,
            mobile_view: false,
        }
    }
}

impl Contract for ScrapeRequest {
    const NAME: &'static str = "scrape request";

    fn schema() -> Value {
        json!({
            "type": "object",
            "required": ["url"],
            "properties": {
                "url": { "type": "string" },
                "maxDepth": { "type": "integer", "minimum": 0, "maximum": 2 },
                "followLinks": { "type": "boolean" },
                "pages": { "type": "integer", "minimum": 1, "maximum": 10 },
                "mobile_view": { "type": "boolean" }
            }
        })
    }

    fn refine(&self, errors: &mut FieldErrors) {
        if Url::parse(&self.url).is_err() {
            errors.push("url", "Please provide a valid URL.");
        }
    }
}

/// A link extracted by the scrape service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
    pub text: String,
}

impl PageLink {
    /// Build a link from its address and anchor text.
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// The normalized scrape payload returned to callers.
///
/// `title` and `textSummary` fall back to fixed literals when the service
/// omits them or sends empty strings; `links` keeps service order and may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub links: Vec<PageLink>,
    #[serde(default = "default_summary")]
    pub text_summary: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_summary() -> String {
    DEFAULT_SUMMARY.to_string()
}

impl Contract for ScrapeResult {
    const NAME: &'static str = "scrape result";

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "links": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "required": ["href", "text"],
                        "properties": {
                            "href": { "type": "string" },
                            "text": { "type": "string" }
                        }
                    }
                },
                "textSummary": { "type": "string" }
            }
        })
    }

    fn normalize(mut self) -> Self {
        if self.title.is_empty() {
            self.title = default_title();
        }
        if self.text_summary.is_empty() {
            self.text_summary = default_summary();
        }
        self
    }
}
