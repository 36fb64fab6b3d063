//! File selection core
//!
//! Pure state transitions for the drop zone: drag enter/leave, drop,
//! picker changes and removal. Nothing in here touches the terminal; the
//! rendering layer borrows [`SelectionState`] snapshots and the outside
//! world learns about changes through a [`SelectionObserver`].
//!
//! # Example
//!
//! ```
//! use inspector::selection::{FileSelectionManager, SelectionConfig, SelectedFile};
//!
//! let mut manager = FileSelectionManager::new(SelectionConfig::default().with_multiple(false))
//!     .with_observer(|files: &[SelectedFile]| println!("{} selected", files.len()));
//!
//! manager.begin_drag();
//! manager.complete_drop(["a.txt", "b.txt"]);
//!
//! assert!(!manager.is_drag_active());
//! assert_eq!(manager.files().len(), 1);
//! ```

mod accept;
mod manager;
mod payload;
mod types;

pub use accept::AcceptFilter;
pub use manager::{FileSelectionManager, SelectionConfig, SelectionObserver};
pub use payload::parse_drop_text;
pub use types::{DragState, SelectedFile, SelectionState};
