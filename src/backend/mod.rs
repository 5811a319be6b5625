//! Content source backends
//!
//! The production backend is whatever database client the caller wires in
//! through the `ContentSource` trait. What lives here is the
//! directory-backed source used by the CLI and the integration tests: one
//! subdirectory per forest, one file per inserted document.

mod dir_source;

pub use dir_source::DirContentSource;
