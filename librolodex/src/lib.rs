//! Rolodex - contact roster, registration and profile core
//!
//! This library holds the state and collaborator contracts behind the Rolodex
//! screens: an in-memory contact roster fed by a permission-gated contacts
//! provider, registration and profile form state, and photo library/camera
//! access for profile pictures.

pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod media;
pub mod providers;
pub mod roster;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{RolodexError, Result};
pub use roster::RosterStore;
pub use types::{ContactField, ContactRecord, PermissionStatus};
