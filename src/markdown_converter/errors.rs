//! Error types for post conversion
//!
//! Domain rules never fail; they degrade to an empty string or to the
//! converted children. Only conditions that make a whole post unconvertible
//! surface here.

use thiserror::Error;

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error types for conversion operations
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The HTML fragment could not be parsed or walked by the tree converter
    #[error("Failed to convert post content: {0}")]
    Parse(String),

    /// Configuration rejected by the builder or the JSON loader
    #[error("Invalid conversion config: {0}")]
    InvalidConfig(String),

    /// A blocking conversion task panicked or was cancelled
    #[error("Conversion task failed: {0}")]
    TaskJoin(String),
}

impl From<serde_json::Error> for ConversionError {
    fn from(error: serde_json::Error) -> Self {
        ConversionError::InvalidConfig(error.to_string())
    }
}

impl From<tokio::task::JoinError> for ConversionError {
    fn from(error: tokio::task::JoinError) -> Self {
        ConversionError::TaskJoin(error.to_string())
    }
}

impl ConversionError {
    /// Whether the failure is tied to the input post rather than the setup.
    ///
    /// Callers converting a whole export use this to skip a single bad post
    /// instead of aborting the run.
    #[must_use]
    pub fn is_per_post(&self) -> bool {
        matches!(self, ConversionError::Parse(_))
    }
}
