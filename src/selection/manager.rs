//! The file selection manager
//!
//! Owns a [`SelectionState`] and applies drag, drop, picker and removal
//! events to it. Every successful mutation notifies the registered
//! [`SelectionObserver`] exactly once with the full ordered list.

use super::accept::AcceptFilter;
use super::types::{DragState, SelectedFile, SelectionState};

/// Receives the new selection after every successful change
pub trait SelectionObserver {
    /// Called synchronously after the state update
    fn selection_changed(&mut self, files: &[SelectedFile]);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&[SelectedFile]),
{
    fn selection_changed(&mut self, files: &[SelectedFile]) {
        self(files);
    }
}

/// Construction parameters, fixed for the manager's lifetime
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Keep the whole drop payload (true) or only its first file (false)
    pub multiple: bool,
    /// Passed through to the picker; never enforced by the manager
    pub accept: AcceptFilter,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            multiple: true,
            accept: AcceptFilter::any(),
        }
    }
}

impl SelectionConfig {
    /// Set multiple mode
    #[must_use]
    pub const fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set the accept filter
    #[must_use]
    pub fn with_accept(mut self, accept: AcceptFilter) -> Self {
        self.accept = accept;
        self
    }
}

/// Stateful manager for the drop zone's file selection
pub struct FileSelectionManager {
    config: SelectionConfig,
    state: SelectionState,
    observer: Option<Box<dyn SelectionObserver>>,
}

impl std::fmt::Debug for FileSelectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSelectionManager")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl FileSelectionManager {
    /// Create a manager without an observer
    #[must_use]
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config,
            state: SelectionState::default(),
            observer: None,
        }
    }

    /// Register the change observer
    #[must_use]
    pub fn with_observer(mut self, observer: impl SelectionObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Selected files in order
    #[must_use]
    pub fn files(&self) -> &[SelectedFile] {
        &self.state.files
    }

    /// Whether a drag gesture is hovering the drop target
    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.state.is_drag_active()
    }

    /// Whether drops keep every file
    #[must_use]
    pub const fn multiple(&self) -> bool {
        self.config.multiple
    }

    /// The accept descriptor handed to the picker
    #[must_use]
    pub const fn accept(&self) -> &AcceptFilter {
        &self.config.accept
    }

    /// A drag gesture entered the drop target
    pub fn begin_drag(&mut self) {
        self.state.drag = DragState::DragActive;
    }

    /// A drag gesture left the drop target without dropping
    pub fn end_drag(&mut self) {
        self.state.drag = DragState::Idle;
    }

    /// A drag gesture was released over the drop target
    ///
    /// Always ends the drag, even for an empty payload. In single mode
    /// only the first file is kept; an empty payload stays empty.
    pub fn complete_drop<I>(&mut self, payload: I)
    where
        I: IntoIterator,
        I::Item: Into<SelectedFile>,
    {
        self.state.drag = DragState::Idle;

        let payload = payload.into_iter().map(Into::into);
        let accepted: Vec<SelectedFile> = if self.config.multiple {
            payload.collect()
        } else {
            payload.take(1).collect()
        };

        log::debug!("drop accepted {} file(s)", accepted.len());
        self.replace(accepted);
    }

    /// The native picker reported a change
    ///
    /// `None` means the dialog was cancelled: nothing changes and no
    /// notification is sent. `Some` replaces the selection with the
    /// payload as given, ignoring `multiple`.
    pub fn select_from_picker<I>(&mut self, payload: Option<I>)
    where
        I: IntoIterator,
        I::Item: Into<SelectedFile>,
    {
        let Some(payload) = payload else {
            log::debug!("picker cancelled");
            return;
        };

        let selected: Vec<SelectedFile> = payload.into_iter().map(Into::into).collect();
        log::debug!("picker selected {} file(s)", selected.len());
        self.replace(selected);
    }

    /// Remove the file at `index`
    ///
    /// Returns the removed file. Stale indices are ignored silently.
    pub fn remove_at(&mut self, index: usize) -> Option<SelectedFile> {
        if index >= self.state.files.len() {
            log::trace!("ignoring remove at stale index {index}");
            return None;
        }

        let removed = self.state.files.remove(index);
        self.notify();
        Some(removed)
    }

    fn replace(&mut self, files: Vec<SelectedFile>) {
        self.state.files = files;
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.selection_changed(&self.state.files);
        }
    }
}

impl Default for FileSelectionManager {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingObserver;

    fn files(names: &[&str]) -> Vec<SelectedFile> {
        names.iter().map(|n| SelectedFile::from(*n)).collect()
    }

    fn manager(multiple: bool) -> (FileSelectionManager, RecordingObserver) {
        let recorder = RecordingObserver::default();
        let manager = FileSelectionManager::new(SelectionConfig::default().with_multiple(multiple))
            .with_observer(recorder.clone());
        (manager, recorder)
    }

    #[test]
    fn test_single_mode_drop_keeps_first_file() {
        let (mut manager, recorder) = manager(false);

        manager.complete_drop(files(&["a.txt", "b.txt"]));

        assert_eq!(manager.files(), files(&["a.txt"]).as_slice());
        assert_eq!(recorder.calls(), vec![files(&["a.txt"])]);
    }

    #[test]
    fn test_single_mode_empty_drop_inserts_nothing() {
        let (mut manager, recorder) = manager(false);

        manager.begin_drag();
        manager.complete_drop(Vec::<SelectedFile>::new());

        assert!(manager.files().is_empty());
        assert!(!manager.is_drag_active());
        assert_eq!(recorder.calls(), vec![Vec::new()]);
    }

    #[test]
    fn test_multiple_mode_empty_drop() {
        let (mut manager, recorder) = manager(true);

        manager.complete_drop(Vec::<SelectedFile>::new());

        assert!(manager.files().is_empty());
        assert!(!manager.is_drag_active());
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.last(), Some(Vec::new()));
    }

    #[test]
    fn test_drop_replaces_previous_selection() {
        let (mut manager, recorder) = manager(true);

        manager.complete_drop(files(&["a.txt", "b.txt"]));
        manager.complete_drop(files(&["c.txt"]));

        assert_eq!(manager.files(), files(&["c.txt"]).as_slice());
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn test_drop_preserves_payload_order_and_duplicates() {
        let (mut manager, _) = manager(true);

        manager.complete_drop(files(&["b.txt", "a.txt", "b.txt"]));

        assert_eq!(manager.files(), files(&["b.txt", "a.txt", "b.txt"]).as_slice());
    }

    #[test]
    fn test_picker_cancel_is_noop() {
        let (mut manager, recorder) = manager(true);
        manager.complete_drop(files(&["a.txt"]));
        manager.begin_drag();

        manager.select_from_picker(None::<Vec<SelectedFile>>);

        assert_eq!(manager.files(), files(&["a.txt"]).as_slice());
        assert!(manager.is_drag_active());
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_picker_empty_list_notifies() {
        let (mut manager, recorder) = manager(true);
        manager.complete_drop(files(&["a.txt"]));

        manager.select_from_picker(Some(Vec::<SelectedFile>::new()));

        assert!(manager.files().is_empty());
        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.last(), Some(Vec::new()));
    }

    #[test]
    fn test_picker_ignores_single_mode() {
        let (mut manager, recorder) = manager(false);

        manager.select_from_picker(Some(files(&["a.txt", "b.txt"])));

        assert_eq!(manager.files().len(), 2);
        assert_eq!(recorder.last(), Some(files(&["a.txt", "b.txt"])));
    }

    #[test]
    fn test_remove_at_middle() {
        let (mut manager, recorder) = manager(true);
        manager.complete_drop(files(&["a.txt", "b.txt", "c.txt"]));

        let removed = manager.remove_at(1);

        assert_eq!(removed, Some(SelectedFile::from("b.txt")));
        assert_eq!(manager.files(), files(&["a.txt", "c.txt"]).as_slice());
        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.last(), Some(files(&["a.txt", "c.txt"])));
    }

    #[test]
    fn test_remove_at_out_of_bounds_is_silent() {
        let (mut manager, recorder) = manager(true);
        manager.complete_drop(files(&["a.txt"]));
        manager.begin_drag();

        assert_eq!(manager.remove_at(1), None);
        assert_eq!(manager.remove_at(usize::MAX), None);

        assert_eq!(manager.files(), files(&["a.txt"]).as_slice());
        assert!(manager.is_drag_active());
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_remove_only_entry_by_duplicate_position() {
        let (mut manager, _) = manager(true);
        manager.complete_drop(files(&["dup.txt", "dup.txt"]));

        manager.remove_at(0);

        assert_eq!(manager.files(), files(&["dup.txt"]).as_slice());
    }

    #[test]
    fn test_drag_state_machine() {
        let (mut manager, recorder) = manager(true);
        assert!(!manager.is_drag_active());

        manager.begin_drag();
        manager.begin_drag();
        assert!(manager.is_drag_active());

        manager.end_drag();
        manager.end_drag();
        assert!(!manager.is_drag_active());

        manager.begin_drag();
        manager.complete_drop(files(&["x.txt"]));
        assert!(!manager.is_drag_active());
        assert_eq!(manager.files(), files(&["x.txt"]).as_slice());

        // Drag transitions alone never notify
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_without_observer_still_mutates() {
        let mut manager = FileSelectionManager::default();
        assert!(manager.multiple());

        manager.complete_drop(files(&["a.txt", "b.txt"]));
        manager.remove_at(0);

        assert_eq!(manager.files(), files(&["b.txt"]).as_slice());
    }

    #[test]
    fn test_closure_observer() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut manager = FileSelectionManager::default()
            .with_observer(move |files: &[SelectedFile]| sink.borrow_mut().push(files.len()));

        manager.complete_drop(files(&["a.txt", "b.txt"]));
        manager.remove_at(5);
        manager.remove_at(0);

        assert_eq!(*seen.borrow(), vec![2, 1]);
    }
}
