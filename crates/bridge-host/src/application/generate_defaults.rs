//! DefaultGenerator: writes the commented default configuration document.
//!
//! Runs when the loader finds no document.  The existing file, if any, is
//! overwritten without a merge or backup.
//!
//! # Termination policy
//!
//! - A write failure is fatal and terminates the process immediately with
//!   [`EXIT_FAILURE`], whatever `abort_on_error` says.
//! - After a successful write the process is terminated only when
//!   `abort_on_error` is `true`.  The loader passes the hardcoded default
//!   (`false`) because the flag itself is stored in the document that is
//!   missing, so this branch is unreachable from a normal start-up.
//!
//! Termination goes through [`ProcessExit`] so tests can observe it without
//! ending the test process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bridge_core::{render_default_document, BridgeConfig};
use tracing::{error, info, warn};

use super::config_error::ConfigError;
use super::document_store::DocumentStore;

/// Exit status used whenever the configuration subsystem ends the process.
pub const EXIT_FAILURE: i32 = 1;

/// Ends the host process.
pub trait ProcessExit: Send + Sync {
    /// Terminates the process with `status`.
    ///
    /// Production implementations never return; test doubles record the call
    /// and return.
    fn exit(&self, status: i32);
}

/// Result of a successful default generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The document was written and the process keeps running.
    Written { path: PathBuf },
    /// The document was written and termination was requested.
    AbortRequested { path: PathBuf },
}

impl GenerateOutcome {
    pub fn path(&self) -> &Path {
        match self {
            GenerateOutcome::Written { path } | GenerateOutcome::AbortRequested { path } => path,
        }
    }
}

/// The default generation use case.
pub struct DefaultGenerator {
    store: Arc<dyn DocumentStore>,
    exit: Arc<dyn ProcessExit>,
}

impl DefaultGenerator {
    pub fn new(store: Arc<dyn DocumentStore>, exit: Arc<dyn ProcessExit>) -> Self {
        Self { store, exit }
    }

    /// Writes the default document.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write fails.  The process has already
    /// been asked to exit by then.
    pub fn generate(&self, abort_on_error: bool) -> Result<GenerateOutcome, ConfigError> {
        let path = self.store.location().to_path_buf();
        info!("generating default configuration at {}", path.display());

        let text = render_default_document(&BridgeConfig::default());
        if let Err(e) = self.store.write(&text) {
            error!("unable to write default configuration: {e}");
            self.exit.exit(EXIT_FAILURE);
            return Err(e);
        }

        info!("default configuration written to {}", path.display());
        warn!(
            "edit the bot token and channel id in {} before the bridge can start",
            path.display()
        );

        if abort_on_error {
            error!("abort on error is enabled; terminating after writing defaults");
            self.exit.exit(EXIT_FAILURE);
            return Ok(GenerateOutcome::AbortRequested { path });
        }

        Ok(GenerateOutcome::Written { path })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
