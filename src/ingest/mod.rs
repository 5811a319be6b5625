//! Ingestion subsystem
//!
//! The write path of the loader: documents are converted to the backend's
//! insertable representation, sharded across forests by stable placement,
//! accumulated in per-forest batch buffers, and bulk-inserted through
//! short-lived sessions.
//!
//! # Design Principles
//!
//! - Placement is a pure function of the document identifier
//! - A buffer never exceeds the configured batch size
//! - Sessions live for one insert operation and close on every exit path
//! - A failed bulk insert surfaces its error with the buffer already
//!   cleared; retry policy belongs to the upstream framework

mod batch;
mod content;
mod errors;
mod options;
mod session;
mod uri;
mod writer;

pub use batch::ContentBatch;
pub use content::{Content, ContentBody};
pub use errors::{IngestError, IngestResult};
pub use options::{parse_permission_tokens, Capability, ContentFormat, InsertOptions, Permission};
pub use session::{ContentSource, ForestId, RequestError, RequestResult, Session, SessionGuard};
pub use uri::DocumentUri;
pub use writer::ContentWriter;
