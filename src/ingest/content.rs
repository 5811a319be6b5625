//! Insertable content
//!
//! The backend's native insertable representation of one document: its
//! target URI, its payload body, and the writer's shared insertion
//! options.

use std::sync::Arc;

use crate::document::Document;

use super::errors::{IngestError, IngestResult};
use super::options::InsertOptions;
use super::uri::DocumentUri;

/// Payload body of an insertable content object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBody {
    Text(String),
    Bytes(Vec<u8>),
}

/// A document converted for insertion
#[derive(Debug, Clone)]
pub struct Content {
    uri: String,
    body: ContentBody,
    options: Arc<InsertOptions>,
}

impl Content {
    /// Convert a document into its insertable representation.
    ///
    /// Text and node documents become text content (nodes serialized to
    /// markup); small binaries become byte content. Large binary documents
    /// have no insertable form — their payload belongs to the retrieval
    /// side — and fail with `UnsupportedContent`.
    pub fn from_document(
        uri: &DocumentUri,
        document: Document,
        options: Arc<InsertOptions>,
    ) -> IngestResult<Self> {
        let body = match document {
            Document::Text(text) => ContentBody::Text(text),
            Document::Node(node) => ContentBody::Text(node.to_text()),
            Document::SmallBinary(bytes) => ContentBody::Bytes(bytes),
            Document::LargeBinary(_) => {
                return Err(IngestError::UnsupportedContent(
                    "large binary documents are not insertable".to_string(),
                ))
            }
        };

        Ok(Self {
            uri: uri.as_str().to_string(),
            body,
            options,
        })
    }

    /// The target URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The payload body
    pub fn body(&self) -> &ContentBody {
        &self.body
    }

    /// The payload as bytes
    pub fn bytes(&self) -> &[u8] {
        match &self.body {
            ContentBody::Text(text) => text.as_bytes(),
            ContentBody::Bytes(bytes) => bytes,
        }
    }

    /// The insertion options attached to this content
    pub fn options(&self) -> &InsertOptions {
        &self.options
    }
}
