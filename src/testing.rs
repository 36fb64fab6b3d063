//! Testing utilities for inspector
//!
//! Helpers shared by unit tests: an observer that records every
//! notification, filesystem fixtures, and a way to read back what a
//! widget rendered into a ratatui `Buffer`.
//!
//! Only available when compiled with `cfg(test)`.

use crate::selection::{SelectedFile, SelectionObserver};
use ratatui::buffer::Buffer;
use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

/// Observer that records each notification it receives
///
/// Clones share the same log, so a test can keep one handle and give
/// the other to the manager.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    calls: Rc<RefCell<Vec<Vec<SelectedFile>>>>,
}

impl RecordingObserver {
    /// Every notification so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<SelectedFile>> {
        self.calls.borrow().clone()
    }

    /// Number of notifications
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Most recent notification
    #[must_use]
    pub fn last(&self) -> Option<Vec<SelectedFile>> {
        self.calls.borrow().last().cloned()
    }
}

impl SelectionObserver for RecordingObserver {
    fn selection_changed(&mut self, files: &[SelectedFile]) {
        self.calls.borrow_mut().push(files.to_vec());
    }
}

/// Create files (and their parent directories) under `root`
///
/// Each file gets its own name as content.
///
/// # Errors
/// Returns an `io::Error` if a directory or file cannot be created.
pub fn create_tree(root: &Path, files: &[&str]) -> std::io::Result<()> {
    for rel in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&path)?;
        file.write_all(rel.as_bytes())?;
    }
    Ok(())
}

/// Rendered buffer as text, one line per row, trailing spaces trimmed
#[must_use]
pub fn buffer_text(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width.max(1));
    buf.content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(ratatui::buffer::Cell::symbol).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use tempfile::TempDir;

    #[test]
    fn test_recording_observer_shares_log() {
        let recorder = RecordingObserver::default();
        let mut handle = recorder.clone();

        handle.selection_changed(&[SelectedFile::from("a.txt")]);
        handle.selection_changed(&[]);

        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.calls()[0], vec![SelectedFile::from("a.txt")]);
        assert_eq!(recorder.last(), Some(Vec::new()));
    }

    #[test]
    fn test_create_tree() {
        let dir = TempDir::new().unwrap();
        create_tree(dir.path(), &["a.txt", "sub/b.txt"]).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "a.txt");
        assert!(dir.path().join("sub/b.txt").exists());
    }

    #[test]
    fn test_buffer_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 2));
        buf.set_string(0, 0, "hi", ratatui::style::Style::default());
        buf.set_string(1, 1, "yo", ratatui::style::Style::default());
        assert_eq!(buffer_text(&buf), "hi\n yo");
    }
}
