//! Backend insertion contract
//!
//! The store the writer inserts into is opaque: a `ContentSource` opens
//! short-lived sessions, a session performs one insert operation (single
//! or bulk), and the session is closed on every exit path. `SessionGuard`
//! carries the close so an early error return cannot leak a session.

use std::fmt;

use thiserror::Error;

use super::content::Content;

/// Identifier of one storage forest
pub type ForestId = String;

/// Failure reported by the backend for a session or insert request
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    /// Create a request failure with the backend's reason
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for backend requests
pub type RequestResult<T> = Result<T, RequestError>;

/// Provider of insertion sessions for one content store
pub trait ContentSource: Send + Sync + fmt::Debug {
    /// Open a session. A forest id binds the session to that forest
    /// (fast-load placement); `None` leaves placement to the backend.
    fn new_session(&self, forest: Option<&str>) -> RequestResult<Box<dyn Session>>;
}

/// One connection session: a single insert operation, then close
pub trait Session {
    /// Insert one content object
    fn insert(&mut self, content: &Content) -> RequestResult<()>;

    /// Insert a batch of content objects as one request
    fn insert_batch(&mut self, contents: &[Content]) -> RequestResult<()>;

    /// Release the session. Called exactly once per session.
    fn close(&mut self);
}

/// Scope that closes the wrapped session on every exit path
pub struct SessionGuard {
    session: Option<Box<dyn Session>>,
}

impl SessionGuard {
    /// Take ownership of a session for the current insert operation
    pub fn new(session: Box<dyn Session>) -> Self {
        Self {
            session: Some(session),
        }
    }

    /// Insert one content object through the guarded session
    pub fn insert(&mut self, content: &Content) -> RequestResult<()> {
        match self.session.as_mut() {
            Some(session) => session.insert(content),
            None => Err(RequestError::new("session already closed")),
        }
    }

    /// Insert a batch through the guarded session
    pub fn insert_batch(&mut self, contents: &[Content]) -> RequestResult<()> {
        match self.session.as_mut() {
            Some(session) => session.insert_batch(contents),
            None => Err(RequestError::new("session already closed")),
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSession {
        closes: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Session for CountingSession {
        fn insert(&mut self, _content: &Content) -> RequestResult<()> {
            if self.fail {
                Err(RequestError::new("refused"))
            } else {
                Ok(())
            }
        }

        fn insert_batch(&mut self, _contents: &[Content]) -> RequestResult<()> {
            if self.fail {
                Err(RequestError::new("refused"))
            } else {
                Ok(())
            }
        }

        fn close(&mut self) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_guard_closes_on_drop() {
        let closes = Arc::new(AtomicUsize::new(0));
        {
            let _guard = SessionGuard::new(Box::new(CountingSession {
                closes: Arc::clone(&closes),
                fail: false,
            }));
        }
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_closes_exactly_once_after_error() {
        let closes = Arc::new(AtomicUsize::new(0));
        let err = {
            let mut guard = SessionGuard::new(Box::new(CountingSession {
                closes: Arc::clone(&closes),
                fail: true,
            }));
            let uri = crate::ingest::DocumentUri::new("a.txt");
            let content = crate::ingest::Content::from_document(
                &uri,
                crate::document::Document::Text("x".into()),
                Arc::new(crate::ingest::InsertOptions::default()),
            )
            .unwrap();
            guard.insert(&content)
        };

        assert!(err.is_err());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }
}
