//! # Ingestion Errors

use thiserror::Error;

use super::session::RequestError;

/// Result type for ingestion operations
pub type IngestResult<T> = Result<T, IngestError>;

/// Ingestion errors
#[derive(Debug, Clone, Error)]
pub enum IngestError {
    /// The document identifier is not a usable insertion target
    #[error("Invalid document URI: {0}")]
    InvalidUri(String),

    /// The document variant has no insertable representation
    #[error("Unsupported content: {0}")]
    UnsupportedContent(String),

    /// The backend rejected or failed an insert request
    #[error("Insert request failed on {target}: {reason}")]
    Request { target: String, reason: String },

    /// A forest id resolved by placement has no registered source
    #[error("Unknown forest: {0}")]
    UnknownForest(String),

    /// The writer was constructed without any content source
    #[error("No content sources configured")]
    NoForests,

    /// The writer has already been closed
    #[error("Writer is closed")]
    WriterClosed,
}

impl IngestError {
    /// Wrap a backend failure with the forest the session targeted
    pub(crate) fn request(forest: Option<&str>, source: RequestError) -> Self {
        IngestError::Request {
            target: forest.unwrap_or("unpartitioned store").to_string(),
            reason: source.to_string(),
        }
    }
}
