//! Value types held by the file selection manager

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file the user has chosen
///
/// The handle is a reference into the host filesystem. The selection core
/// never opens it; ownership of the bytes stays with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedFile {
    /// Display identifier (the last path component)
    pub name: String,
    /// Opaque reference to the underlying file
    pub handle: PathBuf,
}

impl SelectedFile {
    /// Create a selected file from a path, deriving the display name
    ///
    /// Paths without a final component (e.g. `/` or `..`) fall back to the
    /// full lossy path as their name.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let handle = path.into();
        let name = handle
            .file_name()
            .map_or_else(|| handle.to_string_lossy(), |n| n.to_string_lossy())
            .into_owned();
        Self { name, handle }
    }

    /// Path behind the handle
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.handle
    }
}

impl From<PathBuf> for SelectedFile {
    fn from(path: PathBuf) -> Self {
        Self::from_path(path)
    }
}

impl From<&str> for SelectedFile {
    fn from(path: &str) -> Self {
        Self::from_path(path)
    }
}

/// Drag interaction state of the drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag gesture over the target
    #[default]
    Idle,
    /// A drag gesture is hovering the target
    DragActive,
}

/// Full state of a selection manager
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Selected files in drop/pick order
    pub files: Vec<SelectedFile>,
    /// Current drag interaction state
    pub drag: DragState,
}

impl SelectionState {
    /// Whether a drag gesture is hovering the drop target
    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag == DragState::DragActive
    }

    /// Number of selected files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Header text for the selected-file list, e.g. "2 files selected"
    #[must_use]
    pub fn summary(&self) -> String {
        let count = self.files.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} file{plural} selected")
    }
}
