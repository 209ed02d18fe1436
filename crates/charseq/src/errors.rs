//! # Error Types

/// Errors from charseq operations.
#[derive(Debug, thiserror::Error)]
pub enum CSError {
    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// Configuration values are unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The model failed, or produced output inconsistent with the vocabulary.
    ///
    /// Any partial decode output is discarded.
    #[error("inference failed: {0}")]
    Inference(String),

    /// The decode was cancelled through a [`crate::CancellationToken`].
    #[error("decode cancelled")]
    Cancelled,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Parse error (integer keys, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for charseq operations.
pub type CSResult<T> = core::result::Result<T, CSError>;

/// Surface a model failure as [`CSError::Inference`].
pub(crate) fn into_inference_error(err: CSError) -> CSError {
    match err {
        CSError::Inference(_) | CSError::Cancelled => err,
        other => CSError::Inference(other.to_string()),
    }
}
