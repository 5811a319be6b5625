//! Per-forest batch accumulation
//!
//! One batch per forest slot accumulates converted content until the
//! writer flushes it. `take` clears the batch in the same step, so a
//! flush leaves the buffer empty whether the insert succeeds or fails.

use super::content::Content;

/// Pending content for one forest
#[derive(Debug, Default)]
pub struct ContentBatch {
    pending: Vec<Content>,
}

impl ContentBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Create with capacity for a full batch
    pub fn with_capacity(batch_size: usize) -> Self {
        Self {
            pending: Vec::with_capacity(batch_size),
        }
    }

    /// Append one converted content object
    pub fn push(&mut self, content: Content) {
        self.pending.push(content);
    }

    /// Number of pending content objects
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if the batch is empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take the accumulated contents, leaving the batch empty
    pub fn take(&mut self) -> Vec<Content> {
        std::mem::take(&mut self.pending)
    }
}
