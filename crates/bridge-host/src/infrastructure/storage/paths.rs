//! Location of the configuration document.
//!
//! The document is always named [`CONFIG_FILE_NAME`].  Its directory is
//! either given explicitly (`--config-dir` / `CHAT_BRIDGE_CONFIG_DIR`) or the
//! platform-appropriate directory:
//! - Windows:  `%APPDATA%\ChatBridge\bridge.toml`
//! - Linux and other Unix:  `$XDG_CONFIG_HOME/chatbridge/bridge.toml`, or
//!   `~/.config/chatbridge/bridge.toml` when that is unset or relative
//! - macOS:    `~/Library/Application Support/ChatBridge/bridge.toml`

use std::path::{Path, PathBuf};

use crate::application::ConfigError;

/// File name of the configuration document.
pub const CONFIG_FILE_NAME: &str = "bridge.toml";

/// Directory and file path of the configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    dir: PathBuf,
}

impl ConfigPaths {
    /// Uses `dir` as the configuration directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Uses the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] when the environment
    /// variable the platform directory is derived from is unset.
    pub fn platform() -> Result<Self, ConfigError> {
        let var = |name: &str| std::env::var_os(name).map(PathBuf::from);

        let dir = if cfg!(target_os = "windows") {
            var("APPDATA").map(|base| base.join("ChatBridge"))
        } else if cfg!(target_os = "macos") {
            var("HOME").map(|home| home.join("Library/Application Support/ChatBridge"))
        } else if cfg!(unix) {
            var("XDG_CONFIG_HOME")
                .filter(|base| base.is_absolute())
                .or_else(|| var("HOME").map(|home| home.join(".config")))
                .map(|base| base.join("chatbridge"))
        } else {
            None
        };

        dir.map(Self::new).ok_or(ConfigError::NoPlatformConfigDir)
    }

    /// Uses `explicit` when given, otherwise the platform directory.
    ///
    /// # Errors
    ///
    /// See [`ConfigPaths::platform`].
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        match explicit {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::platform(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the configuration document.
    pub fn file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
