//! In-terminal file picker
//!
//! Plays the part of the platform's native file dialog: a directory
//! browser that yields either a list of chosen paths or nothing at all
//! when the user cancels. The `accept` filter only hides files from the
//! listing; directories are always shown so the user can navigate.

use crate::selection::AcceptFilter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kind of a listing row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// The `..` row
    Parent,
    /// A subdirectory
    Directory,
    /// A regular file
    File,
}

/// One row of the picker listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    /// Display name
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Row kind
    pub kind: EntryKind,
}

/// Result of a picker interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Keep the picker open
    Continue,
    /// User confirmed these files
    Confirmed(Vec<PathBuf>),
    /// User dismissed the dialog
    Cancelled,
}

impl PickerOutcome {
    /// The payload the picker hands to the selection manager
    ///
    /// `Continue` has no payload either; callers only forward finished
    /// outcomes.
    #[must_use]
    pub fn into_payload(self) -> Option<Vec<PathBuf>> {
        match self {
            Self::Confirmed(paths) => Some(paths),
            Self::Continue | Self::Cancelled => None,
        }
    }
}

/// State of an open picker dialog
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Directory currently listed
    pub dir: PathBuf,
    /// Listing rows
    pub entries: Vec<PickerEntry>,
    /// Cursor row
    pub cursor: usize,
    /// Marked files in marking order
    pub marked: Vec<PathBuf>,
    multiple: bool,
    accept: AcceptFilter,
}

impl PickerState {
    /// Open a picker on `dir`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be read.
    pub fn open(dir: impl Into<PathBuf>, multiple: bool, accept: AcceptFilter) -> io::Result<Self> {
        let mut state = Self {
            dir: dir.into(),
            entries: Vec::new(),
            cursor: 0,
            marked: Vec::new(),
            multiple,
            accept,
        };
        state.refresh()?;
        Ok(state)
    }

    /// Whether several files may be marked
    #[must_use]
    pub const fn multiple(&self) -> bool {
        self.multiple
    }

    /// The accept filter in effect
    #[must_use]
    pub const fn accept(&self) -> &AcceptFilter {
        &self.accept
    }

    /// Re-read the current directory
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be read.
    pub fn refresh(&mut self) -> io::Result<()> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            if path.is_dir() {
                dirs.push(PickerEntry {
                    name,
                    path,
                    kind: EntryKind::Directory,
                });
            } else if self.accept.matches(&path) {
                files.push(PickerEntry {
                    name,
                    path,
                    kind: EntryKind::File,
                });
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));

        self.entries.clear();
        if let Some(parent) = self.dir.parent() {
            self.entries.push(PickerEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                kind: EntryKind::Parent,
            });
        }
        self.entries.extend(dirs);
        self.entries.extend(files);
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));

        Ok(())
    }

    /// Row under the cursor
    #[must_use]
    pub fn current(&self) -> Option<&PickerEntry> {
        self.entries.get(self.cursor)
    }

    /// Move the cursor up
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    /// Whether a path is marked
    #[must_use]
    pub fn is_marked(&self, path: &Path) -> bool {
        self.marked.iter().any(|p| p == path)
    }

    /// Toggle the mark on the file under the cursor
    ///
    /// In single mode a new mark replaces the previous one.
    pub fn toggle_mark(&mut self) {
        let Some(entry) = self.current() else {
            return;
        };
        if entry.kind != EntryKind::File {
            return;
        }

        let path = entry.path.clone();
        if let Some(pos) = self.marked.iter().position(|p| *p == path) {
            self.marked.remove(pos);
        } else {
            if !self.multiple {
                self.marked.clear();
            }
            self.marked.push(path);
        }
    }

    /// Enter on the cursor row
    ///
    /// Directories are entered; a file confirms the marks, or the file
    /// itself when nothing is marked.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a directory cannot be read.
    pub fn activate(&mut self) -> io::Result<PickerOutcome> {
        let Some(entry) = self.current().cloned() else {
            return Ok(self.confirm_marked());
        };

        match entry.kind {
            EntryKind::Parent | EntryKind::Directory => {
                self.enter(entry.path)?;
                Ok(PickerOutcome::Continue)
            }
            EntryKind::File => {
                if self.marked.is_empty() {
                    Ok(PickerOutcome::Confirmed(vec![entry.path]))
                } else {
                    Ok(self.confirm_marked())
                }
            }
        }
    }

    /// Confirm the marked files, possibly none
    #[must_use]
    pub fn confirm_marked(&self) -> PickerOutcome {
        PickerOutcome::Confirmed(self.marked.clone())
    }

    /// Dismiss the dialog
    #[must_use]
    pub const fn cancel(&self) -> PickerOutcome {
        PickerOutcome::Cancelled
    }

    fn enter(&mut self, dir: PathBuf) -> io::Result<()> {
        let previous = std::mem::replace(&mut self.dir, dir);
        self.cursor = 0;
        if let Err(e) = self.refresh() {
            self.dir = previous;
            self.refresh()?;
            return Err(e);
        }
        log::trace!("picker entered {}", self.dir.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::create_tree;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        create_tree(dir.path(), &["b.png", "a.txt", "c.png", "nested/inner.png"]).unwrap();
        dir
    }

    fn names(state: &PickerState) -> Vec<&str> {
        state.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_listing_dirs_first_then_sorted_files() {
        let dir = fixture();
        let state = PickerState::open(dir.path(), true, AcceptFilter::any()).unwrap();
        assert_eq!(names(&state), vec!["..", "nested", "a.txt", "b.png", "c.png"]);
    }

    #[test]
    fn test_accept_filter_hides_files_not_dirs() {
        let dir = fixture();
        let state = PickerState::open(dir.path(), true, AcceptFilter::parse(".png")).unwrap();
        assert_eq!(names(&state), vec!["..", "nested", "b.png", "c.png"]);
    }

    #[test]
    fn test_enter_file_without_marks_confirms_it() {
        let dir = fixture();
        let mut state = PickerState::open(dir.path(), true, AcceptFilter::any()).unwrap();
        state.cursor = 2;

        let outcome = state.activate().unwrap();
        assert_eq!(outcome, PickerOutcome::Confirmed(vec![dir.path().join("a.txt")]));
    }

    #[test]
    fn test_marks_confirm_in_marking_order() {
        let dir = fixture();
        let mut state = PickerState::open(dir.path(), true, AcceptFilter::any()).unwrap();

        state.cursor = 4;
        state.toggle_mark();
        state.cursor = 2;
        state.toggle_mark();

        let outcome = state.activate().unwrap();
        assert_eq!(
            outcome.into_payload(),
            Some(vec![dir.path().join("c.png"), dir.path().join("a.txt")])
        );
    }

    #[test]
    fn test_single_mode_keeps_one_mark() {
        let dir = fixture();
        let mut state = PickerState::open(dir.path(), false, AcceptFilter::any()).unwrap();

        state.cursor = 2;
        state.toggle_mark();
        state.cursor = 3;
        state.toggle_mark();

        assert_eq!(state.marked, vec![dir.path().join("b.png")]);
    }

    #[test]
    fn test_toggle_mark_ignores_directories() {
        let dir = fixture();
        let mut state = PickerState::open(dir.path(), true, AcceptFilter::any()).unwrap();
        state.cursor = 1;
        state.toggle_mark();
        assert!(state.marked.is_empty());
    }

    #[test]
    fn test_navigate_into_and_out_of_directory() {
        let dir = fixture();
        let mut state = PickerState::open(dir.path(), true, AcceptFilter::any()).unwrap();

        state.cursor = 1;
        assert_eq!(state.activate().unwrap(), PickerOutcome::Continue);
        assert_eq!(state.dir, dir.path().join("nested"));
        assert_eq!(names(&state), vec!["..", "inner.png"]);

        state.cursor = 0;
        assert_eq!(state.activate().unwrap(), PickerOutcome::Continue);
        assert_eq!(state.dir, dir.path());
    }

    #[test]
    fn test_cancel_has_no_payload() {
        let dir = fixture();
        let state = PickerState::open(dir.path(), true, AcceptFilter::any()).unwrap();
        assert_eq!(state.cancel().into_payload(), None);
    }

    #[test]
    fn test_confirm_without_marks_is_empty_payload() {
        let dir = fixture();
        let state = PickerState::open(dir.path(), true, AcceptFilter::any()).unwrap();
        assert_eq!(state.confirm_marked().into_payload(), Some(Vec::new()));
    }

    #[test]
    fn test_cursor_bounds() {
        let dir = fixture();
        let mut state = PickerState::open(dir.path(), true, AcceptFilter::any()).unwrap();
        state.cursor_up();
        assert_eq!(state.cursor, 0);
        for _ in 0..20 {
            state.cursor_down();
        }
        assert_eq!(state.cursor, state.entries.len() - 1);
    }
}
