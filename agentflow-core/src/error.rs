//! Error types shared across the AgentFlow crates.

use thiserror::Error;

use crate::schema::FieldErrors;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Error types produced by configuration loading and contract validation.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required address or setting is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A JSON value did not satisfy its declared contract.
    #[error("{contract} failed validation: {errors}")]
    SchemaMismatch {
        /// Name of the violated contract.
        contract: &'static str,
        /// Per-field complaints.
        errors: FieldErrors,
    },

    /// Serialization/Deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Broken invariant inside this crate.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error.
    #[error("Error: {0}")]
    Generic(#[from] eyre::Report),
}

impl CoreError {
    /// Create a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a new schema mismatch error.
    pub fn schema_mismatch(contract: &'static str, errors: FieldErrors) -> Self {
        Self::SchemaMismatch { contract, errors }
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Field-level diagnostics, when this error carries them.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::SchemaMismatch { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Check if the error is caused by bad caller input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CoreError::configuration("missing base address");
        assert_eq!(err.to_string(), "Configuration error: missing base address");
        assert!(!err.is_user_error());
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_schema_mismatch_carries_diagnostics() {
        let errors = FieldErrors::single("url", "Please provide a valid URL.");
        let err = CoreError::schema_mismatch("scrape request", errors);

        assert!(err.is_user_error());
        let details = err.field_errors().unwrap();
        assert!(details.contains("url"));
        assert!(err.to_string().contains("scrape request"));
        assert!(err.to_string().contains("Please provide a valid URL."));
    }
}
