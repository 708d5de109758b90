//! File-backed configuration document store.

use std::path::{Path, PathBuf};

use crate::application::{ConfigError, DocumentStore};

use super::paths::ConfigPaths;

/// Reads and writes the document at a fixed path on disk.
#[derive(Debug, Clone)]
pub struct FileDocumentStore {
    path: PathBuf,
}

impl FileDocumentStore {
    pub fn new(paths: &ConfigPaths) -> Self {
        Self { path: paths.file() }
    }

    fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl DocumentStore for FileDocumentStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn ensure_container(&self) -> Result<(), ConfigError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                std::fs::create_dir_all(dir).map_err(|source| Self::io_error(dir, source))
            }
            _ => Ok(()),
        }
    }

    fn read(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(&self.path, e)),
        }
    }

    fn write(&self, text: &str) -> Result<(), ConfigError> {
        // Ensure directory exists before writing.
        self.ensure_container()?;
        std::fs::write(&self.path, text).map_err(|source| Self::io_error(&self.path, source))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("bridge_test_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_read_returns_none_when_file_absent() {
        // Arrange
        let dir = scratch_dir();
        let store = FileDocumentStore::new(&ConfigPaths::new(&dir));

        // Act
        let result = store.read();

        // Assert
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_ensure_container_is_idempotent() {
        let dir = scratch_dir().join("nested");
        let store = FileDocumentStore::new(&ConfigPaths::new(&dir));

        store.ensure_container().unwrap();
        store.ensure_container().unwrap();

        assert!(dir.is_dir());
        std::fs::remove_dir_all(dir.parent().unwrap()).ok();
    }

    #[test]
    fn test_write_creates_directory_and_overwrites() {
        // Arrange
        let dir = scratch_dir();
        let store = FileDocumentStore::new(&ConfigPaths::new(&dir));

        // Act
        store.write("first").unwrap();
        store.write("second").unwrap();

        // Assert
        assert_eq!(store.read().unwrap().as_deref(), Some("second"));
        assert_eq!(store.location(), dir.join("bridge.toml"));

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_directory_in_place_of_file_is_io_error() {
        let dir = scratch_dir();
        std::fs::create_dir_all(dir.join("bridge.toml")).unwrap();
        let store = FileDocumentStore::new(&ConfigPaths::new(&dir));

        let result = store.read();

        assert!(matches!(result, Err(ConfigError::Io { .. })));
        std::fs::remove_dir_all(&dir).ok();
    }
}
