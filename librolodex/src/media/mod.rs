//! Photo library and camera access for profile pictures

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PermissionStatus, PickOptions, PickResult};

pub mod directory;
pub mod mock;

/// Access to the host's photo library and camera
///
/// Both pickers may return [`PickResult::Cancelled`], which is not an error.
#[async_trait]
pub trait MediaPicker: Send + Sync {
    fn name(&self) -> &str;

    async fn request_library_permission(&self) -> Result<PermissionStatus>;

    async fn request_camera_permission(&self) -> Result<PermissionStatus>;

    /// Let the user choose an existing image
    ///
    /// # Errors
    ///
    /// `MediaError::PermissionDenied` if library access was refused.
    async fn pick_from_library(&self, options: PickOptions) -> Result<PickResult>;

    /// Take a new picture
    ///
    /// # Errors
    ///
    /// `MediaError::PermissionDenied` if camera access was refused.
    async fn capture_from_camera(&self, options: PickOptions) -> Result<PickResult>;
}
