//! AI assistant error types.

use odinview_core::Error as CoreError;
use thiserror::Error;

/// AI assistant errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Neither provider key is stored in the vault.
    #[error("API keys are not configured. Please set them in the settings.")]
    MissingApiKey,

    /// Core error from odinview-core.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl AiError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Error code for programmatic handling by transports.
impl AiError {
    pub fn code(&self) -> &'static str {
        match self {
            AiError::InvalidInput(_) => "INVALID_INPUT",
            AiError::MissingApiKey => "MISSING_API_KEY",
            AiError::Core(_) => "CORE_ERROR",
        }
    }
}
