use thiserror::Error;

/// Engine-wide error type, consolidating all possible errors into a single enum.
///
/// Remote-generation failures are deliberately not represented here: the
/// remote client reports them inside [`crate::models::GenerationResult`] so
/// the orchestrator can always resolve to the local reply path.
#[derive(Debug, Error, Clone)]
pub enum EngineError {
    /// Represents errors specific to the session actor, such as communication failures.
    #[error("Session actor error: {0}")]
    Actor(String),

    /// Represents data validation errors (e.g., generation parameters out of range).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., a malformed endpoint URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for EngineError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        EngineError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Validation(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for EngineError {
    fn from(err: url::ParseError) -> Self {
        EngineError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for EngineError {
    fn from(err: validator::ValidationErrors) -> Self {
        EngineError::Validation(format!("Validation errors: {}", err))
    }
}
