//! In-memory configuration store for unit testing.
//!
//! [`InMemoryDocumentStore`] keeps the document in a `Mutex<Option<String>>`
//! so tests can seed it, inspect what the use cases wrote, and simulate a
//! failing disk with [`InMemoryDocumentStore::failing_writes`].

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::{ConfigError, DocumentStore};

/// A store that never touches the file system.
pub struct InMemoryDocumentStore {
    path: PathBuf,
    contents: Mutex<Option<String>>,
    write_count: Mutex<usize>,
    fail_writes: bool,
}

impl InMemoryDocumentStore {
    fn build(contents: Option<String>, fail_writes: bool) -> Self {
        Self {
            path: PathBuf::from("memory").join("bridge.toml"),
            contents: Mutex::new(contents),
            write_count: Mutex::new(0),
            fail_writes,
        }
    }

    /// A store with no document.
    pub fn empty() -> Self {
        Self::build(None, false)
    }

    /// A store already holding `text`.
    pub fn with_contents(text: &str) -> Self {
        Self::build(Some(text.to_string()), false)
    }

    /// A store with no document whose writes fail with a permission error.
    pub fn failing_writes() -> Self {
        Self::build(None, true)
    }

    /// Current document text.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        *self.write_count.lock().unwrap()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn ensure_container(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    fn read(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.contents())
    }

    fn write(&self, text: &str) -> Result<(), ConfigError> {
        if self.fail_writes {
            return Err(ConfigError::Io {
                path: self.path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "simulated write failure",
                ),
            });
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        *self.write_count.lock().unwrap() += 1;
        Ok(())
    }
}
