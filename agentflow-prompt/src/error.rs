use agentflow_core::error::CoreError;
use agentflow_core::schema::FieldErrors;
use thiserror::Error;

/// Result type for prompt operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Main error type for prompt suggestion
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {errors}")]
    Validation { errors: FieldErrors },

    #[error("Model error: {0}")]
    Model(String),

    #[error("Model reply failed validation: {errors}")]
    InvalidResponse { errors: FieldErrors },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PromptError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a model error
    pub fn model(message: impl Into<String>) -> Self {
        Self::Model(message.into())
    }

    /// Per-field complaints when the failure carries them.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors } | Self::InvalidResponse { errors } => Some(errors),
            _ => None,
        }
    }

    /// Check if the error was caused by the caller's own input
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<FieldErrors> for PromptError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }
}

// Standard library integrations
impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<genai::Error> for PromptError {
    fn from(err: genai::Error) -> Self {
        Self::Model(err.to_string())
    }
}

impl From<CoreError> for PromptError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Configuration(message) => Self::Configuration(message),
            CoreError::SchemaMismatch { errors, .. } => Self::InvalidResponse { errors },
            CoreError::Serialization(err) => Self::Serialization(err.to_string()),
            other => Self::Model(other.to_string()),
        }
    }
}
