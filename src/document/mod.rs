//! Document model for tree-structured stores
//!
//! Reconstructs documents from the metadata a tree-structured document
//! store produces, including out-of-line binary payloads addressed by
//! byte range into an on-disk container file.
//!
//! # Design Principles
//!
//! - Documents are a closed tagged union; every conversion is explicit
//! - Unsupported root kinds are a skip (`Option`), not an error
//! - Large binary payloads stay out of memory until materialized
//! - Each materialization is a fresh read; nothing is cached

mod errors;
mod factory;
mod large_binary;
mod store;
mod tree;
mod value;

pub use errors::{DocumentError, DocumentResult};
pub use factory::create_document;
pub use large_binary::{BinaryRef, LargeBinaryDocument};
pub use store::{FileRead, FileStore, LocalFileStore};
pub use tree::{NodeKind, TreeNode, TreeRecord};
pub use value::{ContentType, Document};
