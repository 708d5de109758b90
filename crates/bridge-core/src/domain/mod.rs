//! Domain entities for the chat bridge configuration.
//!
//! - **`config`** – [`config::BridgeConfig`], the process-wide settings record
//!   handed to every collaborator at start-up.
//! - **`locale`** – [`locale::Locale`], the culture context used for every
//!   numeric and boolean conversion while the configuration is read.

pub mod config;
pub mod locale;
