//! Error handling for Scribe.
//! One error enum per subsystem, `thiserror` only, aggregated into [`ScribeError`].

pub mod config_error;
pub mod error_code;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::ScribeErrorCode;
pub use storage_error::StorageError;

/// Top-level error surfaced by every Scribe operation.
#[derive(Debug, thiserror::Error)]
pub enum ScribeError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("dependency {dependency} failed: {reason}")]
    DependencyFailure { dependency: String, reason: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ScribeError {
    /// Shorthand for [`ScribeError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`ScribeError::DependencyFailure`].
    pub fn dependency(dependency: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DependencyFailure {
            dependency: dependency.into(),
            reason: reason.into(),
        }
    }

    /// Re-label an error raised by a collaborator as a dependency failure.
    /// Errors that already are dependency failures pass through unchanged.
    pub fn from_dependency(dependency: &str, err: ScribeError) -> Self {
        match err {
            Self::DependencyFailure { .. } => err,
            other => Self::dependency(dependency, other.to_string()),
        }
    }

    /// Whether the error came from a collaborator rather than from the caller's input.
    pub fn is_dependency_failure(&self) -> bool {
        matches!(self, Self::DependencyFailure { .. })
    }
}

impl ScribeErrorCode for ScribeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::DependencyFailure { .. } => error_code::DEPENDENCY_FAILURE,
            Self::StorageError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type ScribeResult<T> = Result<T, ScribeError>;
