//! Error types for code generation.

use jsonmeta_schema::MetaError;
use thiserror::Error;

/// Error type for the text and file entry points.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema validation or generation error.
    #[error("schema error: {0}")]
    Meta(#[from] MetaError),

    /// Input is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Returns the schema error, if this is one.
    #[must_use]
    pub fn as_meta(&self) -> Option<&MetaError> {
        match self {
            Self::Meta(err) => Some(err),
            _ => None,
        }
    }
}
