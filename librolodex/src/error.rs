//! Error types for Rolodex

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RolodexError>;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Contacts error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RolodexError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RolodexError::InvalidInput(_) => 3,
            RolodexError::Provider(ProviderError::PermissionDenied(_)) => 2,
            RolodexError::Media(MediaError::PermissionDenied(_)) => 2,
            RolodexError::Provider(_) => 1,
            RolodexError::Media(_) => 1,
            RolodexError::Config(_) => 1,
        }
    }

    /// True when the host refused access rather than failing outright
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            RolodexError::Provider(ProviderError::PermissionDenied(_))
                | RolodexError::Media(MediaError::PermissionDenied(_))
        )
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures reported by a contacts provider (the device contact store)
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Failed to fetch contacts: {0}")]
    Fetch(String),

    #[error("Malformed contact data: {0}")]
    Parse(String),
}

/// Failures reported by the photo library or camera
#[derive(Error, Debug, Clone)]
pub enum MediaError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unsupported media: {0}")]
    Unsupported(String),

    #[error("Media I/O failed: {0}")]
    Io(String),
}
