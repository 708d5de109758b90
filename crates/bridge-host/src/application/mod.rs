//! Application layer use cases for the bridge host.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure rules in `bridge-core`) and the infrastructure (files, processes).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a goal (e.g., "produce a fully
//!   validated configuration, or explain why there is none").
//! - **Depend on abstractions** ([`document_store::DocumentStore`],
//!   [`generate_defaults::ProcessExit`]) rather than concrete implementations,
//!   so tests can swap in in-memory doubles.
//! - **Contain no direct file-system or process calls**.
//!
//! # Sub-modules
//!
//! - **`load_config`**       – Reads the document, converts every field under
//!   the document's locale, and returns the finished configuration.  Falls
//!   back to default generation when the document is absent.
//!
//! - **`generate_defaults`** – Writes the commented default document and
//!   applies the terminate-on-generate policy.
//!
//! - **`display_config`**    – Renders the loaded configuration to the log at
//!   debug level.
//!
//! - **`document_store`**    – The storage abstraction shared by the above.
//!
//! - **`config_error`**      – The error taxonomy returned by every use case.

pub mod config_error;
pub mod display_config;
pub mod document_store;
pub mod generate_defaults;
pub mod load_config;

pub use config_error::ConfigError;
pub use document_store::DocumentStore;
pub use generate_defaults::{DefaultGenerator, GenerateOutcome, ProcessExit, EXIT_FAILURE};
pub use load_config::{ConfigLoader, LoadOutcome};
