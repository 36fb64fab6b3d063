//! Terminal user interface
//!
//! Everything between the selection core and the terminal: widgets that
//! render a selection snapshot, the event router that turns terminal
//! events into selection operations, line-mode prompts for the setup
//! wizard and the output layer shared by the CLI and the status bar.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   crossterm events (mouse, paste, keys) │
//! └────────────────┬────────────────────────┘
//!                  │ handle_event
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │   AppState                              │
//! │   FileSelectionManager ──► observer ──► │ StatusBarWriter
//! └────────────────┬────────────────────────┘
//!                  │ SelectionState snapshot
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │   widgets: MainLayout, DropZone,        │
//! │   FileList, PickerModal, AuthScreen     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Rendering a widget
//!
//! ```
//! use inspector::selection::{AcceptFilter, SelectionState};
//! use inspector::ui::Theme;
//! use inspector::ui::widgets::DropZone;
//! use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
//!
//! let state = SelectionState::default();
//! let accept = AcceptFilter::parse("image/*");
//! let theme = Theme::default();
//!
//! let area = Rect::new(0, 0, 60, 7);
//! let mut buf = Buffer::empty(area);
//! DropZone::new(&state, &accept, &theme).render(area, &mut buf);
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use inspector::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("2 files selected");
//! output.info("Any file type");
//! ```

pub mod app;
pub mod error;
pub mod events;
pub mod input;
pub mod output;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::InspectorApp;
pub use error::{Result, UiError};
pub use events::{EventResult, handle_event};
pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
pub use state::{AppState, Mode, Screen};
pub use theme::Theme;
pub use widgets::Variant;
