//! # Backing File Store
//!
//! Contract for the store that holds binary container files, plus the
//! local-directory implementation. Large-binary accessors resolve their
//! relative container paths against a store rooted at the forest data
//! directory.

use std::fmt;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use super::errors::{DocumentError, DocumentResult};

/// A readable stream over a stored container file, supporting positioned
/// reads via seek.
pub trait FileRead: Read + Seek {}

impl<T: Read + Seek> FileRead for T {}

/// Store of container files addressed by relative path
pub trait FileStore: Send + Sync + fmt::Debug {
    /// Check if a container exists at the path
    fn exists(&self, path: &str) -> DocumentResult<bool>;

    /// Open the container at the path for reading
    fn open(&self, path: &str) -> DocumentResult<Box<dyn FileRead>>;
}

/// Local-directory file store rooted at a forest data directory
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory container paths resolve against
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &str) -> DocumentResult<bool> {
        Ok(self.full_path(path).exists())
    }

    fn open(&self, path: &str) -> DocumentResult<Box<dyn FileRead>> {
        let full_path = self.full_path(path);

        let file = File::open(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DocumentError::NotFound(path.to_string())
            } else {
                DocumentError::io(path, e)
            }
        })?;

        Ok(Box::new(file))
    }
}
