//! Forest-partitioned content writer
//!
//! The writer owns the forest table, the per-forest batch buffers, and
//! the flush logic. One writer is driven by one sequential caller; the
//! upstream framework may run many writers in parallel, each with its own
//! isolated state.
//!
//! Lifecycle: OPEN → (write)* → CLOSED. Close flushes every non-empty
//! buffer exactly once; there is no reopen.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::LoaderConfig;
use crate::document::Document;
use crate::observability::Logger;

use super::batch::ContentBatch;
use super::content::Content;
use super::errors::{IngestError, IngestResult};
use super::options::InsertOptions;
use super::session::{ContentSource, ForestId, SessionGuard};
use super::uri::DocumentUri;

/// Writer that shards documents across forests and batches inserts.
pub struct ContentWriter {
    /// Directory prefix applied to URIs in fast-load mode
    output_dir: Option<String>,
    /// Options attached to every insert, shared read-only
    options: Arc<InsertOptions>,
    /// Ordered forest table; placement indexes into it
    forest_ids: Vec<ForestId>,
    /// Session provider per forest
    sources: HashMap<ForestId, Arc<dyn ContentSource>>,
    /// One buffer per forest slot, present only when batching is enabled
    batches: Option<Vec<ContentBatch>>,
    batch_size: usize,
    fast_load: bool,
    closed: bool,
}

impl ContentWriter {
    /// Create a writer over an ordered forest table.
    ///
    /// In fast-load mode the writer picks a forest per document by stable
    /// placement over `sources`; otherwise only the first source is used
    /// and sessions are opened unbound. Insertion options are built once
    /// from `config` and shared across all inserts.
    ///
    /// # Errors
    ///
    /// Returns `NoForests` if `sources` is empty.
    pub fn new(
        config: &LoaderConfig,
        sources: Vec<(ForestId, Arc<dyn ContentSource>)>,
    ) -> IngestResult<Self> {
        if sources.is_empty() {
            return Err(IngestError::NoForests);
        }

        let forest_ids: Vec<ForestId> = sources.iter().map(|(id, _)| id.clone()).collect();
        let source_map: HashMap<ForestId, Arc<dyn ContentSource>> = sources.into_iter().collect();

        let batches = if config.batching_enabled() {
            Some(
                (0..forest_ids.len())
                    .map(|_| ContentBatch::with_capacity(config.batch_size))
                    .collect(),
            )
        } else {
            None
        };

        Ok(Self {
            output_dir: config.output_dir.clone(),
            options: Arc::new(InsertOptions::from_config(config)),
            forest_ids,
            sources: source_map,
            batches,
            batch_size: config.batch_size,
            fast_load: config.fast_load,
            closed: false,
        })
    }

    /// The options attached to every insert
    pub fn options(&self) -> &InsertOptions {
        &self.options
    }

    /// Total content objects currently buffered across all forests
    pub fn pending(&self) -> usize {
        self.batches
            .as_ref()
            .map(|batches| batches.iter().map(ContentBatch::len).sum())
            .unwrap_or(0)
    }

    /// Write one document under the given identifier.
    ///
    /// In fast-load mode the identifier is first rewritten with the
    /// configured output directory, then validated; placement derives
    /// from the rewritten identifier. The document is converted before
    /// anything is buffered, so a conversion failure leaves no partial
    /// state.
    ///
    /// # Errors
    ///
    /// - `WriterClosed` after `close`
    /// - `InvalidUri` for a malformed identifier (record aborted)
    /// - `UnsupportedContent` for a non-insertable document variant
    /// - `Request` when the backend fails; the session is closed first,
    ///   and a failed bulk insert leaves the buffer empty rather than
    ///   resubmitting a poisoned batch
    pub fn write(&mut self, uri: &mut DocumentUri, document: Document) -> IngestResult<()> {
        if self.closed {
            return Err(IngestError::WriterClosed);
        }

        if self.fast_load {
            if let Some(dir) = &self.output_dir {
                uri.prepend_directory(dir);
            }
        }
        uri.validate()?;

        let (slot, forest) = if self.fast_load {
            let slot = uri.placement(self.forest_ids.len());
            (slot, Some(self.forest_ids[slot].clone()))
        } else {
            (0, None)
        };

        let content = Content::from_document(uri, document, Arc::clone(&self.options))?;

        let flush = if let Some(batches) = self.batches.as_mut() {
            let batch = &mut batches[slot];
            batch.push(content);
            if batch.len() >= self.batch_size {
                Some(batch.take())
            } else {
                None
            }
        } else {
            return self.insert_one(forest.as_deref(), &content);
        };

        if let Some(contents) = flush {
            self.insert_many(forest.as_deref(), &contents)?;
        }

        Ok(())
    }

    /// Flush every non-empty buffer and close the writer.
    ///
    /// Each forest flushes with its own session. A failure does not stop
    /// later forests; the first error is returned and the rest are logged.
    /// A writer with batching disabled closes without any backend call,
    /// and a second close is a no-op.
    pub fn close(&mut self) -> IngestResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let Some(batches) = self.batches.as_mut() else {
            return Ok(());
        };

        let remaining: Vec<(usize, Vec<Content>)> = batches
            .iter_mut()
            .enumerate()
            .filter(|(_, batch)| !batch.is_empty())
            .map(|(slot, batch)| (slot, batch.take()))
            .collect();

        let mut first_error = None;
        for (slot, contents) in remaining {
            let forest = if self.fast_load {
                Some(self.forest_ids[slot].clone())
            } else {
                None
            };
            if let Err(e) = self.insert_many(forest.as_deref(), &contents) {
                Logger::error(
                    "CLOSE_FLUSH_FAILED",
                    &[
                        ("forest", forest.as_deref().unwrap_or("unpartitioned store")),
                        ("documents", &contents.len().to_string()),
                        ("error", &e.to_string()),
                    ],
                );
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn source_for(&self, forest: Option<&str>) -> IngestResult<&Arc<dyn ContentSource>> {
        match forest {
            Some(id) => self
                .sources
                .get(id)
                .ok_or_else(|| IngestError::UnknownForest(id.to_string())),
            None => self
                .forest_ids
                .first()
                .and_then(|id| self.sources.get(id))
                .ok_or(IngestError::NoForests),
        }
    }

    fn insert_one(&self, forest: Option<&str>, content: &Content) -> IngestResult<()> {
        let source = self.source_for(forest)?;
        let session = source
            .new_session(forest)
            .map_err(|e| IngestError::request(forest, e))?;
        let mut guard = SessionGuard::new(session);
        guard
            .insert(content)
            .map_err(|e| IngestError::request(forest, e))
    }

    fn insert_many(&self, forest: Option<&str>, contents: &[Content]) -> IngestResult<()> {
        if contents.is_empty() {
            return Ok(());
        }
        let source = self.source_for(forest)?;
        let session = source
            .new_session(forest)
            .map_err(|e| IngestError::request(forest, e))?;
        let mut guard = SessionGuard::new(session);
        guard
            .insert_batch(contents)
            .map_err(|e| IngestError::request(forest, e))
    }
}
