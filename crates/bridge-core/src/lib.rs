//! # bridge-core
//!
//! Shared library for the chat bridge containing the configuration domain,
//! the locale rules used to convert textual settings, and the model of the
//! persisted configuration document.
//!
//! This crate performs no file-system access, no logging and no process
//! control.  The `bridge-host` crate owns those concerns and drives the
//! types defined here.
//!
//! # Architecture overview (for beginners)
//!
//! The chat bridge links a game-server community to a channel on an external
//! messaging platform.  Every runtime-tunable behaviour (authentication,
//! filtering, formatting, locale, failure policy) is read once at start-up
//! from a single configuration document.
//!
//! - **`domain`** – The finished, fully-validated [`BridgeConfig`] record and
//!   the [`Locale`] value that governs how numbers and booleans are read from
//!   text.
//!
//! - **`document`** – How the configuration is laid out on disk: a TOML file
//!   made of *elements* (tables) holding *attributes* (keys).  It also renders
//!   the fully-commented default document written on first run.

pub mod document;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `bridge_core::BridgeConfig` instead of `bridge_core::domain::config::BridgeConfig`.
pub use document::template::render_default_document;
pub use document::{ConfigDocument, DocumentError};
pub use domain::config::{BridgeConfig, BroadcastColor};
pub use domain::locale::{Locale, LocaleError, FALLBACK_LOCALE};
