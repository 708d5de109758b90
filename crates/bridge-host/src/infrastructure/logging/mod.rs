//! Log sink set-up.
//!
//! Every configuration event is a `tracing` event.  Severities map as
//! Debug → DEBUG, Info → INFO, Warning → WARN, Error → ERROR.
//!
//! The default filter shows INFO and above everywhere, plus the DEBUG lines
//! printed by the configuration presenter (which only runs in debug mode).
//! `RUST_LOG` overrides the default.

pub mod capture;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,bridge_host::application::display_config=debug";

/// Installs the global fmt subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
