//! Observability for the loader
//!
//! This module provides structured logging only. The loader is a library
//! driven by an external job framework, so metrics and lifecycle tracing
//! belong to the caller; what the loader itself reports is configuration
//! warnings, skipped-document diagnostics, and flush failures.
//!
//! # Principles
//!
//! 1. Logging is read-only and has no effect on ingestion
//! 2. Synchronous, no buffering
//! 3. One log line = one event
//! 4. Deterministic output for a given call sequence

mod logger;

pub use logger::{Logger, Severity};
