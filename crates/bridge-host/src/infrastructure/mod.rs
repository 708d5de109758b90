//! Infrastructure layer for the bridge host.
//!
//! Contains OS-facing adapters: the file-backed configuration store, the
//! platform configuration directory, process termination, and log setup.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `bridge_core`, but MUST NOT be imported by the `application` layer
//! outside of tests.

pub mod logging;
pub mod process;
pub mod storage;
