//! Outbound (Driven) ports for the feature listeners.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Time source for consistent timestamp handling.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Hand-driven time source.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    time: AtomicU64,
}

impl ManualTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, time: Timestamp) {
        self.time.store(time, Ordering::SeqCst);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(Ordering::SeqCst)
    }
}

/// Where features print client-side chat lines.
///
/// Lines are markup strings (`<gold>text</gold>`); rendering them is the
/// host's job.
pub trait ChatSink: Send + Sync {
    fn show(&self, markup: &str);
}

/// Sink that writes lines to the log. Used when no chat HUD is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogChatSink;

impl ChatSink for LogChatSink {
    fn show(&self, markup: &str) {
        tracing::info!(target: "lsu::chat", line = markup, "Chat");
    }
}

/// Sink that keeps every line it is given.
#[derive(Debug, Default)]
pub struct RecordingChatSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingChatSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines shown so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ChatSink for RecordingChatSink {
    fn show(&self, markup: &str) {
        self.lines.lock().push(markup.to_string());
    }
}
