//! Process control: the production [`ProcessExit`] implementation.

pub mod mock;

use crate::application::ProcessExit;

/// Ends the process through [`std::process::exit`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdProcessExit;

impl ProcessExit for StdProcessExit {
    fn exit(&self, status: i32) {
        std::process::exit(status);
    }
}
