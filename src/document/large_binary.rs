//! Large binary documents
//!
//! A large binary document does not hold its payload: it holds a
//! descriptor addressing the payload within a container file, and reads
//! the byte range on demand. Materialization is a fresh read every time —
//! payload sizes are uncontrolled, and the write pipeline consumes each
//! payload once, so a cache could only grow without bound.

use std::io::SeekFrom;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::errors::{DocumentError, DocumentResult};
use super::store::FileStore;

/// Descriptor addressing an out-of-line binary payload.
///
/// `path` is relative to the store root; `orig_len` is the uncompressed
/// length the payload had before the store wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryRef {
    pub path: String,
    pub offset: u64,
    pub size: u64,
    pub orig_len: u64,
}

/// A document whose binary payload is loaded lazily from a container file
#[derive(Debug, Clone)]
pub struct LargeBinaryDocument {
    binary: BinaryRef,
    store: Arc<dyn FileStore>,
}

impl LargeBinaryDocument {
    /// Create a document over a descriptor and the store it resolves in
    pub fn new(store: Arc<dyn FileStore>, binary: BinaryRef) -> Self {
        Self { binary, store }
    }

    /// The payload descriptor
    pub fn binary(&self) -> &BinaryRef {
        &self.binary
    }

    /// Read the full payload from the container file.
    ///
    /// Performs a positioned read of exactly `size` bytes starting at
    /// `offset`, looping over short reads from the underlying transport.
    ///
    /// # Errors
    ///
    /// - `BinaryTooLarge` if the declared size cannot be held in a single
    ///   buffer — checked before any store access
    /// - `NotFound` if the container file does not exist
    /// - `Io` if the read fails or the container ends early
    pub fn materialize(&self) -> DocumentResult<Vec<u8>> {
        if self.binary.size > isize::MAX as u64 {
            return Err(DocumentError::BinaryTooLarge(self.binary.size));
        }
        let len = usize::try_from(self.binary.size)
            .map_err(|_| DocumentError::BinaryTooLarge(self.binary.size))?;

        if !self.store.exists(&self.binary.path)? {
            return Err(DocumentError::NotFound(self.binary.path.clone()));
        }

        let mut stream = self.store.open(&self.binary.path)?;
        stream
            .seek(SeekFrom::Start(self.binary.offset))
            .map_err(|e| DocumentError::io(&self.binary.path, e))?;

        let mut buf = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            let n = stream
                .read(&mut buf[filled..])
                .map_err(|e| DocumentError::io(&self.binary.path, e))?;
            if n == 0 {
                return Err(DocumentError::Io {
                    path: self.binary.path.clone(),
                    reason: format!(
                        "container ended after {} of {} payload bytes",
                        filled, len
                    ),
                });
            }
            filled += n;
        }

        Ok(buf)
    }
}
