//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal could not be set up or drawn to
    #[error("Terminal error: {0}")]
    TerminalError(String),

    /// Invalid configuration
    #[error("Invalid UI configuration: {0}")]
    InvalidConfig(String),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = UiError::InvalidConfig("unknown variant 'x'".to_string());
        assert_eq!(error.to_string(), "Invalid UI configuration: unknown variant 'x'");
    }

    #[test]
    fn test_io_error_conversion() {
        let error: UiError = std::io::Error::other("boom").into();
        assert!(matches!(error, UiError::IoError(_)));
        assert_eq!(error.to_string(), "IO error: boom");
    }
}
