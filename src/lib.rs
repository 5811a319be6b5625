//! arbordb - forest-partitioned bulk document ingestion
//!
//! The write path shards documents across a fixed set of storage forests,
//! batches them for bulk insertion, and manages per-forest sessions with
//! flush-on-close semantics. The read side reconstructs documents from
//! tree-document records, including out-of-line binary payloads addressed
//! by byte range into an on-disk container.

pub mod backend;
pub mod cli;
pub mod config;
pub mod document;
pub mod ingest;
pub mod observability;
