//! Contract validation for external JSON payloads.
//!
//! Every wire shape AgentFlow exchanges with an upstream service is described
//! by a [`Contract`]: a JSON Schema for the structural pass, serde defaults
//! for the typed pass, and optional refinement and normalization steps.
//! Validation is strict on required fields, permissive on unknown extra
//! fields, and either yields a fully defaulted typed value or fails wholesale
//! with per-field diagnostics. Defaulting is idempotent: feeding a validated
//! value through its contract again yields the identical value.

use std::{collections::BTreeMap, fmt};

use jsonschema::error::ValidationErrorKind;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{CoreError, Result};

/// Ordered map from field path to its list of human-readable complaints.
///
/// An empty field path addresses the value as a whole. Serializes as a plain
/// object, suitable for embedding in an error response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Create an empty diagnostic set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set holding a single complaint.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Record a complaint against a field path.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Check whether any complaint was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether `field` has at least one complaint.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Complaints recorded against `field`.
    pub fn messages_for(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Iterate over `(field, complaints)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                if field.is_empty() {
                    write!(f, "{message}")?;
                } else {
                    write!(f, "{field}: {message}")?;
                }
                first = false;
            }
        }
        Ok(())
    }
}

/// A typed wire contract: a JSON Schema plus optional typed-value checks.
pub trait Contract: DeserializeOwned {
    /// Contract name used in diagnostics.
    const NAME: &'static str;

    /// JSON Schema for the structural validation pass.
    fn schema() -> Value;

    /// Checks that need the typed value (bounds the schema cannot express).
    fn refine(&self, _errors: &mut FieldErrors) {}

    /// Fill defaults that depend on observed values, e.g. empty strings.
    fn normalize(self) -> Self
    where
        Self: Sized,
    {
        self
    }
}

/// Validate `raw` against `C`'s contract and produce the normalized value.
///
/// Fails with [`CoreError::SchemaMismatch`] carrying one complaint list per
/// offending field. No defaults are applied on failure.
pub fn validate_contract<C: Contract>(raw: &Value) -> Result<C> {
    let schema = C::schema();
    let validator = jsonschema::Validator::new(&schema)
        .map_err(|err| CoreError::internal(format!("{} schema does not compile: {err}", C::NAME)))?;

    let mut errors = FieldErrors::new();
    for err in validator.iter_errors(raw) {
        errors.push(field_path(&err), err.to_string());
    }
    if !errors.is_empty() {
        return Err(CoreError::schema_mismatch(C::NAME, errors));
    }

    let typed: C = match serde_json::from_value(raw.clone()) {
        Ok(value) => value,
        Err(err) => {
            let errors = FieldErrors::single("", err.to_string());
            return Err(CoreError::schema_mismatch(C::NAME, errors));
        }
    };

    let mut errors = FieldErrors::new();
    typed.refine(&mut errors);
    if !errors.is_empty() {
        return Err(CoreError::schema_mismatch(C::NAME, errors));
    }

    Ok(typed.normalize())
}

/// Field path for a structural error.
///
/// Required-property violations point at the missing property; everything
/// else points at the offending instance location.
fn field_path(err: &jsonschema::ValidationError<'_>) -> String {
    if let ValidationErrorKind::Required { property } = &err.kind {
        if let Some(name) = property.as_str() {
            return name.to_string();
        }
    }
    err.instance_path
        .to_string()
        .trim_start_matches('/')
        .replace('/', ".")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Probe {
        name: String,
        #[serde(default = "default_limit")]
        limit: u8,
    }

    fn default_limit() -> u8 {
        4
    }

    impl Contract for Probe {
        const NAME: &'static str = "probe";

        fn schema() -> Value {
            json!({
                "type": "object",
                "required": ["name"],
                "properties": {
                    "name": { "type": "string" },
                    "limit": { "type": "integer", "minimum": 1, "maximum": 8 }
                }
            })
        }

        fn refine(&self, errors: &mut FieldErrors) {
            if self.name.starts_with(' ') {
                errors.push("name", "must not start with whitespace");
            }
        }
    }

    #[test]
    fn test_defaults_applied() {
        let probe: Probe = validate_contract(&json!({"name": "alpha"})).unwrap();
        assert_eq!(
            probe,
            Probe {
                name: "alpha".to_string(),
                limit: 4
            }
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let probe: Probe =
            validate_contract(&json!({"name": "alpha", "limit": 2, "extra": true})).unwrap();
        assert_eq!(probe.limit, 2);
    }

    #[test]
    fn test_missing_required_field_named_in_diagnostics() {
        let err = validate_contract::<Probe>(&json!({"limit": 2})).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(errors.contains("name"));
    }

    #[test]
    fn test_out_of_range_rejected_not_clamped() {
        let err = validate_contract::<Probe>(&json!({"name": "alpha", "limit": 9})).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(errors.contains("limit"));
    }

    #[test]
    fn test_refinement_complaints_reported() {
        let err = validate_contract::<Probe>(&json!({"name": " alpha"})).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(
            errors.messages_for("name").unwrap(),
            ["must not start with whitespace"]
        );
    }

    #[test]
    fn test_multiple_complaints_collected() {
        let err = validate_contract::<Probe>(&json!({"limit": 0})).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(errors.contains("name"));
        assert!(errors.contains("limit"));
    }

    #[test]
    fn test_non_object_value_rejected() {
        let err = validate_contract::<Probe>(&json!("just a string")).unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_field_errors_display_and_serialization() {
        let mut errors = FieldErrors::new();
        errors.push("url", "Please provide a valid URL.");
        errors.push("pages", "too many pages");

        assert_eq!(
            errors.to_string(),
            "pages: too many pages; url: Please provide a valid URL."
        );
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "pages": ["too many pages"],
                "url": ["Please provide a valid URL."]
            })
        );
    }
}
