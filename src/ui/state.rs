//! Application state for the inspector TUI
//!
//! Owns the selection manager and everything the event loop needs to
//! route terminal events into it: the active screen, the open picker,
//! the list cursor and the screen areas recorded at the last draw.

use crate::auth::AuthGate;
use crate::config::LayoutSettings;
use crate::picker::{PickerOutcome, PickerState};
use crate::selection::{FileSelectionManager, SelectedFile, SelectionConfig};
use crate::ui::output::{OutputWriter, StatusBarWriter};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level screens, cycled with Tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// File drop zone and selection list
    #[default]
    Dropzone,
    /// Placeholder page
    ComingSoon,
    /// Identity provider gate
    Auth,
}

impl Screen {
    /// Every screen in tab order
    pub const ALL: [Self; 3] = [Self::Dropzone, Self::ComingSoon, Self::Auth];

    /// Tab label
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Dropzone => "Files",
            Self::ComingSoon => "Coming Soon",
            Self::Auth => "Auth",
        }
    }

    /// The screen after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dropzone => Self::ComingSoon,
            Self::ComingSoon => Self::Auth,
            Self::Auth => Self::Dropzone,
        }
    }

    /// The screen before this one, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Dropzone => Self::Auth,
            Self::ComingSoon => Self::Dropzone,
            Self::Auth => Self::ComingSoon,
        }
    }
}

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Screen keys and mouse gestures
    #[default]
    Normal,
    /// The picker dialog has focus
    Picker,
}

/// Application state
pub struct AppState {
    /// The selection core
    pub manager: FileSelectionManager,
    /// Main layout appearance
    pub layout: LayoutSettings,
    /// Resolved identity provider gate
    pub gate: AuthGate,
    /// Active screen
    pub screen: Screen,
    /// Current input mode
    pub mode: Mode,
    /// Open picker dialog, if any
    pub picker: Option<PickerState>,
    /// Directory the picker opens in
    pub picker_root: PathBuf,
    /// Cursor row in the selected-file list
    pub cursor: usize,
    /// Pointer position relative to `main_area` (particles only)
    pub pointer: Option<(u16, u16)>,
    /// Status messages, shared with the selection observer
    pub output: Arc<StatusBarWriter>,
    /// Drop zone area at the last draw
    pub drop_zone_area: Rect,
    /// Main layout panel area at the last draw
    pub main_area: Rect,
    /// Set when the user asked to leave
    pub should_exit: bool,
}

impl AppState {
    /// Create the state, wiring selection changes to the status bar
    #[must_use]
    pub fn new(selection: SelectionConfig, layout: LayoutSettings, gate: AuthGate, picker_root: PathBuf) -> Self {
        let output = Arc::new(StatusBarWriter::new());
        let observer_output = Arc::clone(&output);
        let manager = FileSelectionManager::new(selection).with_observer(move |files: &[SelectedFile]| {
            match files.len() {
                0 => observer_output.info("Selection cleared"),
                1 => observer_output.success("1 file selected"),
                n => observer_output.success(&format!("{n} files selected")),
            }
        });

        Self {
            manager,
            layout,
            gate,
            screen: Screen::default(),
            mode: Mode::default(),
            picker: None,
            picker_root,
            cursor: 0,
            pointer: None,
            output,
            drop_zone_area: Rect::default(),
            main_area: Rect::default(),
            should_exit: false,
        }
    }

    /// Start on a given screen
    #[must_use]
    pub const fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    /// Selected files
    #[must_use]
    pub fn files(&self) -> &[SelectedFile] {
        self.manager.files()
    }

    /// Move the list cursor up
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the list cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.manager.files().len() {
            self.cursor += 1;
        }
    }

    /// Keep the cursor on an existing row
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.manager.files().len().saturating_sub(1));
    }

    /// Remove the file under the cursor
    pub fn remove_current(&mut self) -> Option<SelectedFile> {
        let removed = self.manager.remove_at(self.cursor);
        self.clamp_cursor();
        removed
    }

    /// Open the picker dialog on `picker_root`
    ///
    /// A directory that cannot be read is reported on the status bar and
    /// leaves the state unchanged.
    pub fn open_picker(&mut self) {
        let multiple = self.manager.multiple();
        let accept = self.manager.accept().clone();
        match PickerState::open(&self.picker_root, multiple, accept) {
            Ok(picker) => {
                self.picker = Some(picker);
                self.mode = Mode::Picker;
            }
            Err(e) => {
                log::warn!("cannot open picker at {}: {e}", self.picker_root.display());
                self.output.error(&format!("Cannot open {}: {e}", self.picker_root.display()));
            }
        }
    }

    /// Close the picker and hand its outcome to the manager
    ///
    /// `Continue` leaves the picker open. The picker remembers its last
    /// directory for the next time it is opened.
    pub fn finish_picker(&mut self, outcome: PickerOutcome) {
        if outcome == PickerOutcome::Continue {
            return;
        }

        if let Some(picker) = self.picker.take() {
            self.picker_root = picker.dir;
        }
        self.mode = Mode::Normal;
        self.manager.select_from_picker(outcome.into_payload());
        self.clamp_cursor();
    }

    /// Complete a drop onto the drop zone
    pub fn drop_paths(&mut self, paths: Vec<PathBuf>) {
        self.manager.complete_drop(paths);
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::create_tree;
    use crate::ui::output::MessageLevel;
    use tempfile::TempDir;

    fn make_state(root: PathBuf) -> AppState {
        AppState::new(
            SelectionConfig::default(),
            LayoutSettings::default(),
            AuthGate::MissingKey,
            root,
        )
    }

    #[test]
    fn test_screen_cycle() {
        let mut screen = Screen::default();
        for expected in [Screen::ComingSoon, Screen::Auth, Screen::Dropzone] {
            screen = screen.next();
            assert_eq!(screen, expected);
        }
        assert_eq!(Screen::Dropzone.previous(), Screen::Auth);
        assert_eq!(Screen::ALL.map(|s| s.title()), ["Files", "Coming Soon", "Auth"]);
    }

    #[test]
    fn test_observer_reports_to_status_bar() {
        let mut state = make_state(PathBuf::from("."));
        state.drop_paths(vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);

        let latest = state.output.latest_message().unwrap();
        assert_eq!(latest.level, MessageLevel::Success);
        assert_eq!(latest.text, "2 files selected");

        state.manager.select_from_picker(Some(Vec::<PathBuf>::new()));
        assert_eq!(state.output.latest_message().unwrap().text, "Selection cleared");
    }

    #[test]
    fn test_cursor_stays_on_rows() {
        let mut state = make_state(PathBuf::from("."));
        state.cursor_down();
        assert_eq!(state.cursor, 0);

        state.drop_paths(vec![PathBuf::from("a"), PathBuf::from("b"), PathBuf::from("c")]);
        state.cursor_down();
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 2);

        let removed = state.remove_current().unwrap();
        assert_eq!(removed.name, "c");
        assert_eq!(state.cursor, 1);

        state.cursor_up();
        state.cursor_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_remove_on_empty_selection_is_noop() {
        let mut state = make_state(PathBuf::from("."));
        assert!(state.remove_current().is_none());
        assert_eq!(state.output.message_count(), 0);
    }

    #[test]
    fn test_picker_confirm_and_cancel() {
        let dir = TempDir::new().unwrap();
        create_tree(dir.path(), &["a.txt", "b.txt"]).unwrap();
        let mut state = make_state(dir.path().to_path_buf());

        state.open_picker();
        assert_eq!(state.mode, Mode::Picker);

        let chosen = vec![dir.path().join("b.txt")];
        state.finish_picker(PickerOutcome::Confirmed(chosen));
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.picker.is_none());
        assert_eq!(state.files()[0].name, "b.txt");

        state.open_picker();
        state.finish_picker(PickerOutcome::Cancelled);
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.files().len(), 1);
    }

    #[test]
    fn test_picker_continue_keeps_dialog_open() {
        let dir = TempDir::new().unwrap();
        let mut state = make_state(dir.path().to_path_buf());
        state.open_picker();
        state.finish_picker(PickerOutcome::Continue);
        assert_eq!(state.mode, Mode::Picker);
        assert!(state.picker.is_some());
    }

    #[test]
    fn test_unreadable_picker_root_reports_error() {
        let dir = TempDir::new().unwrap();
        let mut state = make_state(dir.path().join("missing"));
        state.open_picker();

        assert_eq!(state.mode, Mode::Normal);
        assert!(state.picker.is_none());
        assert_eq!(state.output.latest_message().unwrap().level, MessageLevel::Error);
    }
}
