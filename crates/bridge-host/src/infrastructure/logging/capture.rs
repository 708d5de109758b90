//! In-memory log sink for tests.
//!
//! [`CapturedLog::record`] runs a closure with a scoped fmt subscriber that
//! writes plain-text lines (no ANSI colours, no timestamps) into a shared
//! buffer, so assertions can inspect exactly which events were emitted.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Shared buffer receiving formatted log lines.
#[derive(Clone, Default)]
pub struct CapturedLog {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with every event at DEBUG and above captured.
    pub fn record<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Captured lines in emission order.
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{info, trace};

    #[test]
    fn test_captures_events_at_debug_and_above() {
        let log = CapturedLog::new();

        log.record(|| {
            info!("hello");
            trace!("hidden");
        });

        let lines = log.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("hello"));
    }
}
