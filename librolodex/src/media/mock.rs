//! Mock media picker for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::{MediaError, Result};
use crate::media::MediaPicker;
use crate::types::{PermissionStatus, PickOptions, PickResult};

#[derive(Debug, Clone)]
pub struct MockPickerConfig {
    pub library_granted: bool,
    pub camera_granted: bool,
    pub library_result: PickResult,
    pub camera_result: PickResult,
    /// Options received by the last pick, for verification
    pub last_options: Arc<Mutex<Option<PickOptions>>>,
}

impl Default for MockPickerConfig {
    fn default() -> Self {
        Self {
            library_granted: true,
            camera_granted: true,
            library_result: PickResult::Cancelled,
            camera_result: PickResult::Cancelled,
            last_options: Arc::new(Mutex::new(None)),
        }
    }
}

pub struct MockPicker {
    config: MockPickerConfig,
}

impl MockPicker {
    pub fn new(config: MockPickerConfig) -> Self {
        Self { config }
    }

    /// Both pickers return the given uri
    pub fn picking(uri: &str) -> Self {
        let picked = PickResult::Picked {
            uri: uri.to_string(),
        };
        Self::new(MockPickerConfig {
            library_result: picked.clone(),
            camera_result: picked,
            ..Default::default()
        })
    }

    /// Every permission is refused
    pub fn denied() -> Self {
        Self::new(MockPickerConfig {
            library_granted: false,
            camera_granted: false,
            ..Default::default()
        })
    }

    /// The user backs out of both pickers
    pub fn cancelling() -> Self {
        Self::new(MockPickerConfig::default())
    }

    pub fn last_options(&self) -> Option<PickOptions> {
        *self.config.last_options.lock().unwrap()
    }
}

#[async_trait]
impl MediaPicker for MockPicker {
    fn name(&self) -> &str {
        "mock"
    }

    async fn request_library_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::from_granted(self.config.library_granted))
    }

    async fn request_camera_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::from_granted(self.config.camera_granted))
    }

    async fn pick_from_library(&self, options: PickOptions) -> Result<PickResult> {
        *self.config.last_options.lock().unwrap() = Some(options);
        if !self.config.library_granted {
            return Err(MediaError::PermissionDenied("photo library".to_string()).into());
        }
        Ok(self.config.library_result.clone())
    }

    async fn capture_from_camera(&self, options: PickOptions) -> Result<PickResult> {
        *self.config.last_options.lock().unwrap() = Some(options);
        if !self.config.camera_granted {
            return Err(MediaError::PermissionDenied("camera".to_string()).into());
        }
        Ok(self.config.camera_result.clone())
    }
}
