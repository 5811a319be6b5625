//! # Directory-Backed Content Source

use std::fs;
use std::path::{Path, PathBuf};

use crate::ingest::{Content, ContentSource, RequestError, RequestResult, Session};

/// Content source that lands each insert as a file under a root directory.
///
/// A forest-bound session writes under `<root>/<forest>/`; an unbound
/// session writes under the root itself. Document URIs become relative
/// file paths, so a load is directly inspectable on disk.
#[derive(Debug)]
pub struct DirContentSource {
    root: PathBuf,
}

impl DirContentSource {
    /// Create a source rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory inserts land under
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirContentSource {
    fn new_session(&self, forest: Option<&str>) -> RequestResult<Box<dyn Session>> {
        let dir = match forest {
            Some(forest) => self.root.join(forest),
            None => self.root.clone(),
        };

        fs::create_dir_all(&dir)
            .map_err(|e| RequestError::new(format!("cannot open {}: {}", dir.display(), e)))?;

        Ok(Box::new(DirSession { dir }))
    }
}

struct DirSession {
    dir: PathBuf,
}

impl DirSession {
    fn write_one(&self, content: &Content) -> RequestResult<()> {
        let relative = content.uri().trim_start_matches('/');
        let path = self.dir.join(relative);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RequestError::new(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        fs::write(&path, content.bytes())
            .map_err(|e| RequestError::new(format!("cannot write {}: {}", path.display(), e)))
    }
}

impl Session for DirSession {
    fn insert(&mut self, content: &Content) -> RequestResult<()> {
        self.write_one(content)
    }

    fn insert_batch(&mut self, contents: &[Content]) -> RequestResult<()> {
        for content in contents {
            self.write_one(content)?;
        }
        Ok(())
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::ingest::{DocumentUri, InsertOptions};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn content(uri: &str, body: &str) -> Content {
        Content::from_document(
            &DocumentUri::new(uri),
            Document::Text(body.to_string()),
            Arc::new(InsertOptions::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_bound_session_writes_under_forest_dir() {
        let temp = TempDir::new().unwrap();
        let source = DirContentSource::new(temp.path());

        let mut session = source.new_session(Some("forest-001")).unwrap();
        session.insert(&content("a.xml", "<doc/>")).unwrap();
        session.close();

        let written = fs::read(temp.path().join("forest-001").join("a.xml")).unwrap();
        assert_eq!(written, b"<doc/>");
    }

    #[test]
    fn test_unbound_session_writes_under_root() {
        let temp = TempDir::new().unwrap();
        let source = DirContentSource::new(temp.path());

        let mut session = source.new_session(None).unwrap();
        session.insert(&content("/a/b.xml", "body")).unwrap();
        session.close();

        assert!(temp.path().join("a").join("b.xml").exists());
    }

    #[test]
    fn test_batch_insert_writes_every_document() {
        let temp = TempDir::new().unwrap();
        let source = DirContentSource::new(temp.path());

        let batch = vec![
            content("x.xml", "1"),
            content("y.xml", "2"),
            content("sub/z.xml", "3"),
        ];

        let mut session = source.new_session(Some("forest-000")).unwrap();
        session.insert_batch(&batch).unwrap();
        session.close();

        let forest = temp.path().join("forest-000");
        assert!(forest.join("x.xml").exists());
        assert!(forest.join("y.xml").exists());
        assert!(forest.join("sub").join("z.xml").exists());
    }
}
