//! Document identifiers
//!
//! A document URI is the logical path a record is inserted under. In
//! fast-load mode the writer may rewrite it with a directory prefix before
//! validating it, and placement derives from the rewritten form, so the
//! same identifier always lands in the same forest.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::{IngestError, IngestResult};

static URI_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Whitespace, control characters, and URI-hostile punctuation make an
/// identifier unusable as an insertion target.
fn uri_pattern() -> &'static Regex {
    URI_PATTERN.get_or_init(|| {
        Regex::new(r#"^[^\s<>"{}|\\^`\x00-\x1f]+$"#).expect("URI pattern is a valid regex")
    })
}

/// A document's logical insertion path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentUri {
    uri: String,
}

impl DocumentUri {
    /// Create an identifier from the caller-supplied path
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// The current identifier text
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Prefix the identifier with an output directory.
    ///
    /// The result has exactly one separating slash regardless of a
    /// trailing slash on the directory or a leading slash on the
    /// identifier. An empty directory leaves the identifier unchanged.
    pub fn prepend_directory(&mut self, dir: &str) {
        if dir.is_empty() {
            return;
        }
        self.uri = format!(
            "{}/{}",
            dir.trim_end_matches('/'),
            self.uri.trim_start_matches('/')
        );
    }

    /// Check that the identifier is a usable insertion target
    pub fn validate(&self) -> IngestResult<()> {
        if self.uri.is_empty() {
            return Err(IngestError::InvalidUri("empty URI".to_string()));
        }
        if !uri_pattern().is_match(&self.uri) {
            return Err(IngestError::InvalidUri(self.uri.clone()));
        }
        Ok(())
    }

    /// Deterministic forest slot for this identifier.
    ///
    /// CRC32 (IEEE) is stable across runs and platforms, so repeated loads
    /// of the same identifier always resolve the same slot for a fixed
    /// forest count.
    pub fn placement(&self, forest_count: usize) -> usize {
        debug_assert!(forest_count > 0);
        crc32fast::hash(self.uri.as_bytes()) as usize % forest_count
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl From<&str> for DocumentUri {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}
