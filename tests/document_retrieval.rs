//! Document reconstruction tests over a local container store.

use std::sync::Arc;

use arbordb::document::{
    create_document, BinaryRef, Document, FileStore, LocalFileStore, NodeKind, TreeNode,
    TreeRecord,
};
use tempfile::TempDir;

fn store_at(temp: &TempDir) -> Arc<dyn FileStore> {
    Arc::new(LocalFileStore::new(temp.path()))
}

#[test]
fn large_binary_reads_declared_range_from_container() {
    let temp = TempDir::new().unwrap();
    let forest_dir = temp.path().join("Forests").join("f1");
    std::fs::create_dir_all(&forest_dir).unwrap();

    let mut container = Vec::new();
    container.extend_from_slice(&[0u8; 100]); // other documents
    container.extend_from_slice(b"the payload we want");
    container.extend_from_slice(&[0u8; 50]);
    std::fs::write(forest_dir.join("container.bin"), &container).unwrap();

    let store = store_at(&temp);
    let record = TreeRecord::binary_ref("Forests/f1/container.bin", 100, 19, 19);
    let document = create_document(&store, record, "payload.bin").unwrap();

    match document {
        Document::LargeBinary(doc) => {
            assert_eq!(doc.materialize().unwrap(), b"the payload we want");
        }
        other => panic!("expected large binary, got {:?}", other),
    }
}

#[test]
fn inline_binary_skips_the_container_entirely() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp);

    // No container file exists; an inline record never needs one.
    let record = TreeRecord::inline_binary(b"tiny".to_vec());
    let document = create_document(&store, record, "tiny.bin").unwrap();

    assert_eq!(document.as_bytes().unwrap(), b"tiny");
}

#[test]
fn structured_document_survives_text_round_trip() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp);

    let root = TreeNode::Element {
        name: "report".to_string(),
        attributes: vec![("year".to_string(), "2024".to_string())],
        children: vec![TreeNode::text("forest inventory")],
    };
    let record = TreeRecord::element(root);
    let document = create_document(&store, record, "report.xml").unwrap();

    assert_eq!(
        document.as_text().unwrap(),
        r#"<report year="2024">forest inventory</report>"#
    );
    assert_eq!(document.as_node().unwrap().kind(), NodeKind::Element);
}

#[test]
fn unsupported_kinds_are_skipped_not_errors() {
    let temp = TempDir::new().unwrap();
    let store = store_at(&temp);

    let record = TreeRecord::of_kind(NodeKind::Comment);
    assert!(create_document(&store, record, "comment.xml").is_none());
}

#[test]
fn descriptor_survives_serialization() {
    let original = BinaryRef {
        path: "Forests/f3/container.bin".to_string(),
        offset: 123_456,
        size: 789_012,
        orig_len: 1_024_000,
    };

    let encoded = serde_json::to_vec(&original).unwrap();
    let decoded: BinaryRef = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn materialized_descriptor_reads_after_round_trip() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("container.bin"), b"abcdefgh").unwrap();
    let store = store_at(&temp);

    let record = TreeRecord::binary_ref("container.bin", 2, 4, 4);
    let document = create_document(&store, record, "b.bin").unwrap();

    let descriptor = match &document {
        Document::LargeBinary(doc) => doc.binary().clone(),
        other => panic!("expected large binary, got {:?}", other),
    };

    // Ship the descriptor elsewhere and rebuild the document against the
    // same store root.
    let encoded = serde_json::to_string(&descriptor).unwrap();
    let decoded: BinaryRef = serde_json::from_str(&encoded).unwrap();
    let rebuilt =
        arbordb::document::LargeBinaryDocument::new(Arc::clone(&store), decoded);

    assert_eq!(rebuilt.materialize().unwrap(), b"cdef");
}
