//! Output abstraction layer
//!
//! Messages go either to the terminal (CLI commands) or to the TUI's
//! status bar, where they expire after a TTL.

use colored::Colorize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use inspector::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Normal message");
/// output.success("Selection saved");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Clear all messages (for TUI status bars)
    fn clear(&self);
}

/// CLI implementation - writes to stdout/stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        println!("{} {}", "⚠️".yellow(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn clear(&self) {}
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// A status bar message and when it was written
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

/// Buffered writer for the TUI status bar
///
/// Shared between the event loop and the selection observer.
///
/// ```
/// use inspector::ui::output::{OutputWriter, StatusBarWriter};
/// use std::time::Duration;
///
/// let writer = StatusBarWriter::with_ttl(Duration::from_secs(5));
/// writer.success("2 files selected");
///
/// let latest = writer.latest_message().unwrap();
/// assert_eq!(latest.text, "2 files selected");
/// ```
pub struct StatusBarWriter {
    messages: Mutex<Vec<StatusMessage>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Create a new status bar writer with default TTL (5 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    /// Create a new status bar writer with custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StatusMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Messages still within TTL, oldest first
    #[must_use]
    pub fn recent_messages(&self) -> Vec<StatusMessage> {
        self.lock()
            .iter()
            .filter(|m| m.created_at.elapsed() < self.ttl)
            .cloned()
            .collect()
    }

    /// Most recent message still within TTL
    #[must_use]
    pub fn latest_message(&self) -> Option<StatusMessage> {
        self.lock()
            .iter()
            .rev()
            .find(|m| m.created_at.elapsed() < self.ttl)
            .cloned()
    }

    /// Number of messages still within TTL
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|m| m.created_at.elapsed() < self.ttl)
            .count()
    }

    /// Drop expired messages
    pub fn cleanup(&self) {
        let ttl = self.ttl;
        self.lock().retain(|m| m.created_at.elapsed() < ttl);
    }

    fn add_message(&self, level: MessageLevel, text: &str) {
        let mut messages = self.lock();
        messages.push(StatusMessage {
            level,
            text: text.to_string(),
            created_at: Instant::now(),
        });

        if messages.len() > 100 {
            messages.drain(0..50);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
