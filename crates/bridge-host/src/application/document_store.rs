//! Storage abstraction for the configuration document.
//!
//! The file-backed implementation lives in
//! `infrastructure::storage::file_store`; an in-memory double for tests lives
//! in `infrastructure::storage::mock`.

use std::path::Path;

use super::config_error::ConfigError;

/// Reads and writes the single configuration document.
pub trait DocumentStore: Send + Sync {
    /// Where the document lives, for log messages and error reports.
    fn location(&self) -> &Path;

    /// Creates the directory holding the document if it does not exist.
    ///
    /// Idempotent.
    fn ensure_container(&self) -> Result<(), ConfigError>;

    /// Returns the document text, or `Ok(None)` if no document exists.
    fn read(&self) -> Result<Option<String>, ConfigError>;

    /// Replaces the document with `text`, creating it if necessary.
    fn write(&self, text: &str) -> Result<(), ConfigError>;
}
