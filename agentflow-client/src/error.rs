use agentflow_core::error::CoreError;
use agentflow_core::schema::FieldErrors;
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main error type for the webhook clients
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {errors}")]
    Validation { errors: FieldErrors },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("Upstream responded {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("All {attempts} attempts failed: {last}")]
    ExhaustedRetries { attempts: u32, last: Box<ClientError> },

    #[error("{contract} failed validation: {errors}")]
    InvalidResponse {
        contract: &'static str,
        errors: FieldErrors,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Create an upstream status error
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Wrap the last failure once every allowed attempt has been spent
    pub fn exhausted(attempts: u32, last: ClientError) -> Self {
        Self::ExhaustedRetries {
            attempts,
            last: Box::new(last),
        }
    }

    /// The innermost failure, unwrapping any retry exhaustion wrapper.
    pub fn last_cause(&self) -> &ClientError {
        match self {
            Self::ExhaustedRetries { last, .. } => last.last_cause(),
            other => other,
        }
    }

    /// Whether another attempt could reasonably succeed.
    ///
    /// Network failures, timeouts, and 5xx statuses qualify; 4xx statuses
    /// and everything local never do.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::UpstreamStatus { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }

    /// Whether the failure was a per-attempt deadline, looking through
    /// retry exhaustion.
    pub fn is_timeout(&self) -> bool {
        matches!(self.last_cause(), Self::Timeout(_))
    }

    /// The upstream status and message if one was received, looking through
    /// retry exhaustion.
    pub fn upstream_failure(&self) -> Option<(u16, &str)> {
        match self.last_cause() {
            Self::UpstreamStatus { status, message } => Some((*status, message.as_str())),
            _ => None,
        }
    }

    /// Per-field complaints when the failure carries them.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors } | Self::InvalidResponse { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Check if the error was caused by the caller's own input
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<FieldErrors> for ClientError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation { errors }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(err.to_string())
        } else if err.is_status() {
            let status = err.status().map(|s| s.as_u16()).unwrap_or(0);
            Self::UpstreamStatus {
                status,
                message: err.to_string(),
            }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Configuration(message) => Self::Configuration(message),
            CoreError::SchemaMismatch { contract, errors } => {
                Self::InvalidResponse { contract, errors }
            }
            CoreError::Serialization(err) => Self::Decode(err.to_string()),
            other => Self::Internal(other.to_string()),
        }
    }
}
