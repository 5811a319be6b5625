//! # CLI Errors

use thiserror::Error;

use crate::config::ConfigError;
use crate::ingest::IngestError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Ingest(#[from] IngestError),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
