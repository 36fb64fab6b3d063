//! Inspector - a terminal drop zone for picking files
//!
//! The core is the [`selection`] state machine: drag gestures, drops,
//! picker results and removals in, an ordered list of selected files
//! out. Around it sit the in-terminal [`picker`], the [`auth`] gate, the
//! [`config`] layer and the ratatui [`ui`].

use thiserror::Error;

pub mod auth;
pub mod cli;
pub mod config;
pub mod picker;
pub mod selection;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum InspectorError {
    /// Terminal UI error
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Identity provider error
    #[error("Auth error: {0}")]
    Auth(#[from] auth::AuthError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for inspector operations
pub type Result<T> = std::result::Result<T, InspectorError>;
