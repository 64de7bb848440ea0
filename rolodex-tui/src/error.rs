//! Error types for rolodex-tui
//!
//! Provides TUI-specific error types that wrap service layer errors
//! and terminal/IO errors for unified error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Service layer error
    #[error("Service error: {0}")]
    Service(#[from] librolodex::RolodexError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use librolodex::error::ProviderError;

    #[test]
    fn test_service_error_wraps_library_error() {
        let err: TuiError =
            librolodex::RolodexError::from(ProviderError::Fetch("offline".to_string())).into();

        assert!(matches!(err, TuiError::Service(_)));
        assert!(err.to_string().starts_with("Service error:"));
        assert!(err.to_string().contains("offline"));
    }
}
