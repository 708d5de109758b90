//! Storage infrastructure: configuration document persistence.
//!
//! - **`paths`**      – Resolves the configuration directory and file name.
//! - **`file_store`** – [`file_store::FileDocumentStore`], the
//!   [`crate::application::DocumentStore`] used in production.
//! - **`mock`**       – An in-memory store for tests.

pub mod file_store;
pub mod mock;
pub mod paths;
