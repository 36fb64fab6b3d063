//! Ratatui widgets for the inspector TUI

mod auth_screen;
mod coming_soon;
mod dropzone;
mod file_list;
mod help_bar;
mod logo;
mod main_layout;
mod picker_modal;
mod status_bar;

pub use auth_screen::AuthScreen;
pub use coming_soon::ComingSoon;
pub use dropzone::{ACTIVE_TEXT, DROP_ZONE_HEIGHT, DropZone, IDLE_TEXT};
pub use file_list::{FileList, display_size};
pub use help_bar::{HelpBar, KeyHint};
pub use logo::{Logo, TITLE};
pub use main_layout::{LayoutMode, MAX_CONTENT_WIDTH, MainLayout, Variant, relative_position};
pub use picker_modal::PickerModal;
pub use status_bar::StatusBar;
