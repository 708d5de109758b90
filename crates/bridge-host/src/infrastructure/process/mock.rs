//! Recording process exit for unit testing.
//!
//! Calling `exit` on [`RecordingProcessExit`] stores the status instead of
//! ending the test process, so tests can assert whether termination was
//! requested and with which status.

use std::sync::Mutex;

use crate::application::ProcessExit;

/// Records every requested exit status.
#[derive(Default)]
pub struct RecordingProcessExit {
    statuses: Mutex<Vec<i32>>,
}

impl RecordingProcessExit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statuses passed to `exit`, in call order.
    pub fn statuses(&self) -> Vec<i32> {
        self.statuses.lock().unwrap().clone()
    }
}

impl ProcessExit for RecordingProcessExit {
    fn exit(&self, status: i32) {
        self.statuses.lock().unwrap().push(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_statuses_in_order() {
        let exit = RecordingProcessExit::new();
        exit.exit(1);
        exit.exit(2);
        assert_eq!(exit.statuses(), vec![1, 2]);
    }
}
