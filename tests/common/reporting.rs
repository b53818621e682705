//! Recording reporter for message assertions.

use std::sync::Mutex;
use workspace_replication::Reporter;

/// Records every status and error message for assertions.
#[derive(Default)]
pub struct RecordingReporter {
    statuses: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    /// Total messages emitted across both categories.
    pub fn message_count(&self) -> usize {
        self.statuses().len() + self.errors().len()
    }
}

impl Reporter for RecordingReporter {
    fn status(&self, message: String) {
        self.statuses.lock().unwrap().push(message);
    }

    fn error(&self, message: String) {
        self.errors.lock().unwrap().push(message);
    }
}
