//! Error types for the identity provider gate

use thiserror::Error;

/// Errors raised while mounting the hosted identity provider
#[derive(Debug, Error)]
pub enum AuthError {
    /// Key does not start with `pk_test_` or `pk_live_`
    #[error("Malformed publishable key: {0}")]
    MalformedKey(String),

    /// Key payload is not valid base64 or does not name a frontend API
    #[error("Invalid publishable key payload: {0}")]
    InvalidPayload(String),

    /// A configured route could not be resolved to a URL
    #[error("Invalid route '{route}': {source}")]
    InvalidRoute {
        /// Route as configured
        route: String,
        /// Parse failure
        #[source]
        source: url::ParseError,
    },

    /// The system browser could not be launched
    #[error("Failed to open browser: {0}")]
    BrowserError(#[from] std::io::Error),
}

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;
