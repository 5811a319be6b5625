//! Document values
//!
//! A document is a closed tagged union over the variants the store can
//! hold: in-memory text, an in-memory structured node, an in-memory binary
//! payload, or a large binary addressed by reference. Accessors either
//! produce the requested representation or fail with `Unsupported`; no
//! call site needs open-ended type inspection.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{DocumentError, DocumentResult};
use super::large_binary::LargeBinaryDocument;
use super::tree::TreeNode;

/// Content type tag of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    Xml,
    Text,
    Binary,
    Unknown,
}

impl ContentType {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Xml => "XML",
            ContentType::Text => "TEXT",
            ContentType::Binary => "BINARY",
            ContentType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A document value produced by the factory and consumed once by a writer.
#[derive(Debug, Clone)]
pub enum Document {
    /// In-memory text content
    Text(String),
    /// In-memory structured node content
    Node(TreeNode),
    /// In-memory binary content
    SmallBinary(Vec<u8>),
    /// Out-of-line binary content, loaded on demand
    LargeBinary(LargeBinaryDocument),
}

impl Document {
    /// Content type tag of this variant
    pub fn content_type(&self) -> ContentType {
        match self {
            Document::Text(_) => ContentType::Text,
            Document::Node(_) => ContentType::Xml,
            Document::SmallBinary(_) | Document::LargeBinary(_) => ContentType::Binary,
        }
    }

    /// The content as text.
    ///
    /// Structured nodes are serialized to markup. Binary variants fail
    /// with `Unsupported`.
    pub fn as_text(&self) -> DocumentResult<String> {
        match self {
            Document::Text(text) => Ok(text.clone()),
            Document::Node(node) => Ok(node.to_text()),
            Document::SmallBinary(_) | Document::LargeBinary(_) => Err(DocumentError::Unsupported(
                "cannot convert binary content to text".to_string(),
            )),
        }
    }

    /// The content as a structured node.
    ///
    /// Only the node variant supports this.
    pub fn as_node(&self) -> DocumentResult<&TreeNode> {
        match self {
            Document::Node(node) => Ok(node),
            other => Err(DocumentError::Unsupported(format!(
                "cannot convert {} content to a node",
                other.content_type()
            ))),
        }
    }

    /// The content as a byte sequence.
    ///
    /// Text and node variants yield their serialized form; a large binary
    /// performs a fresh positioned read of its container range.
    pub fn as_bytes(&self) -> DocumentResult<Vec<u8>> {
        match self {
            Document::Text(text) => Ok(text.clone().into_bytes()),
            Document::Node(node) => Ok(node.to_text().into_bytes()),
            Document::SmallBinary(bytes) => Ok(bytes.clone()),
            Document::LargeBinary(doc) => doc.materialize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::tree::TreeNode;

    #[test]
    fn test_content_type_tags() {
        assert_eq!(Document::Text("t".into()).content_type(), ContentType::Text);
        assert_eq!(
            Document::Node(TreeNode::text("t")).content_type(),
            ContentType::Xml
        );
        assert_eq!(
            Document::SmallBinary(vec![0]).content_type(),
            ContentType::Binary
        );
    }

    #[test]
    fn test_text_accessors() {
        let doc = Document::Text("hello".to_string());
        assert_eq!(doc.as_text().unwrap(), "hello");
        assert_eq!(doc.as_bytes().unwrap(), b"hello");
        assert!(doc.as_node().is_err());
    }

    #[test]
    fn test_node_serializes_for_text_and_bytes() {
        let doc = Document::Node(TreeNode::element("root", vec![TreeNode::text("x")]));
        assert_eq!(doc.as_text().unwrap(), "<root>x</root>");
        assert_eq!(doc.as_bytes().unwrap(), b"<root>x</root>");
        assert!(doc.as_node().is_ok());
    }

    #[test]
    fn test_binary_rejects_text_and_node() {
        let doc = Document::SmallBinary(vec![0xde, 0xad]);
        assert!(matches!(doc.as_text(), Err(DocumentError::Unsupported(_))));
        assert!(matches!(doc.as_node(), Err(DocumentError::Unsupported(_))));
        assert_eq!(doc.as_bytes().unwrap(), vec![0xde, 0xad]);
    }

    #[test]
    fn test_content_type_serde_names() {
        let encoded = serde_json::to_string(&ContentType::Xml).unwrap();
        assert_eq!(encoded, "\"XML\"");
        let decoded: ContentType = serde_json::from_str("\"BINARY\"").unwrap();
        assert_eq!(decoded, ContentType::Binary);
    }
}
