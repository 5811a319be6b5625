//! Document factory
//!
//! Builds a `Document` from a tree-document record. Unsupported root kinds
//! are a skip, not an error: the caller moves on to the next record.

use std::sync::Arc;

use crate::observability::Logger;

use super::large_binary::LargeBinaryDocument;
use super::store::FileStore;
use super::tree::{NodeKind, TreeRecord};
use super::value::Document;

/// Build a document from a parsed tree-document record.
///
/// `store` is rooted at the forest data directory; a binary record's
/// relative container path resolves against it. Returns `None` for root
/// kinds the loader does not handle, with a TRACE diagnostic naming the
/// skipped record.
pub fn create_document(
    store: &Arc<dyn FileStore>,
    record: TreeRecord,
    uri: &str,
) -> Option<Document> {
    match record.root_kind {
        NodeKind::Binary => {
            if let Some(bytes) = record.binary_data {
                Some(Document::SmallBinary(bytes))
            } else if let Some(binary) = record.binary() {
                Some(Document::LargeBinary(LargeBinaryDocument::new(
                    Arc::clone(store),
                    binary,
                )))
            } else {
                Logger::trace(
                    "DOCUMENT_SKIPPED",
                    &[("uri", uri), ("reason", "binary record carries no payload")],
                );
                None
            }
        }
        NodeKind::Element | NodeKind::Text => match record.root {
            Some(root) => Some(Document::Node(root)),
            None => {
                Logger::trace(
                    "DOCUMENT_SKIPPED",
                    &[("uri", uri), ("reason", "record carries no root node")],
                );
                None
            }
        },
        kind => {
            Logger::trace(
                "DOCUMENT_SKIPPED",
                &[("uri", uri), ("kind", kind.as_str())],
            );
            None
        }
    }
}
