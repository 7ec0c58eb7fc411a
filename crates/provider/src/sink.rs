//! Error sinks: structured-log delivery and in-memory capture.

use crate::ErrorSink;
use roster_core::error::RosterError;
use std::sync::Mutex;

/// Reports errors through `tracing` at error level.
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, error: &RosterError) {
        tracing::error!(%error, "operation failed");
    }
}

/// Captures every reported error for later inspection.
///
/// For tests and for hosts that surface errors outside the engine's call
/// path (status bars, toasts).
#[derive(Default)]
pub struct RecordingSink {
    reported: Mutex<Vec<RosterError>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, oldest first.
    pub fn reported(&self) -> Vec<RosterError> {
        self.reported.lock().expect("reported errors lock").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.lock().expect("reported errors lock").is_empty()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, error: &RosterError) {
        self.reported
            .lock()
            .expect("reported errors lock")
            .push(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_delivery_order() {
        let sink = RecordingSink::new();
        sink.report(&RosterError::InvalidName("first".into()));
        sink.report(&RosterError::Remote("second".into()));

        let reported = sink.reported();
        assert_eq!(reported.len(), 2);
        assert_eq!(reported[0], RosterError::InvalidName("first".into()));
    }
}
