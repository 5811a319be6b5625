//! # Document Model Errors

use thiserror::Error;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Document model errors
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    /// The requested conversion is not defined for this document variant
    #[error("Unsupported conversion: {0}")]
    Unsupported(String),

    /// The backing container file does not exist
    #[error("Binary container not found: {0}")]
    NotFound(String),

    /// The declared payload size cannot be held in a single buffer
    #[error("Declared binary size {0} exceeds the maximum buffer length")]
    BinaryTooLarge(u64),

    /// Reading from the backing store failed
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },
}

impl DocumentError {
    /// Wrap an I/O failure with the container path it occurred on
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        DocumentError::Io {
            path: path.into(),
            reason: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = DocumentError::io(
            "Forests/f1/container.bin",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read"),
        );
        let display = format!("{}", err);
        assert!(display.contains("Forests/f1/container.bin"));
        assert!(display.contains("short read"));
    }

    #[test]
    fn test_too_large_reports_size() {
        let err = DocumentError::BinaryTooLarge(u64::MAX);
        assert!(format!("{}", err).contains(&u64::MAX.to_string()));
    }
}
