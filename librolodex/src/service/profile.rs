//! Profile picture service

use std::sync::Arc;

use crate::error::Result;
use crate::media::MediaPicker;
use crate::service::events::{Event, EventBus, MediaSource};
use crate::types::{PermissionStatus, PickOptions, PickResult};

/// Message shown when the photo library permission is refused
pub const LIBRARY_PERMISSION_NOTICE: &str =
    "Sorry, we need camera roll permissions to make this work!";

#[derive(Clone)]
pub struct ProfileService {
    picker: Arc<dyn MediaPicker>,
    event_bus: EventBus,
    options: PickOptions,
}

impl ProfileService {
    pub fn new(picker: Arc<dyn MediaPicker>, event_bus: EventBus) -> Self {
        Self {
            picker,
            event_bus,
            options: PickOptions::default(),
        }
    }

    /// Ask for library access, as the profile screen does when it opens
    pub async fn request_library_permission(&self) -> Result<PermissionStatus> {
        let status = self.picker.request_library_permission().await?;
        if !status.is_granted() {
            tracing::warn!(picker = self.picker.name(), "Photo library permission not granted");
            self.event_bus.emit(Event::MediaPermissionDenied {
                source: MediaSource::Library,
            });
        }
        Ok(status)
    }

    /// Choose an existing picture from the library
    pub async fn pick_picture(&self) -> Result<PickResult> {
        let result = self.picker.pick_from_library(self.options).await;
        self.report(MediaSource::Library, result)
    }

    /// Take a new picture with the camera
    pub async fn take_picture(&self) -> Result<PickResult> {
        let result = self.picker.capture_from_camera(self.options).await;
        self.report(MediaSource::Camera, result)
    }

    fn report(&self, source: MediaSource, result: Result<PickResult>) -> Result<PickResult> {
        let event = match &result {
            Ok(PickResult::Picked { uri }) => {
                tracing::info!(%source, uri = %uri, "Picture selected");
                Event::PictureSelected {
                    source,
                    uri: uri.clone(),
                }
            }
            Ok(PickResult::Cancelled) => {
                tracing::debug!(%source, "Picture selection cancelled");
                Event::PictureCancelled { source }
            }
            Err(e) if e.is_permission_denied() => {
                tracing::warn!(%source, "Media permission not granted");
                Event::MediaPermissionDenied { source }
            }
            Err(e) => {
                tracing::error!(%source, error = %e, "Picture selection failed");
                Event::PictureFailed {
                    source,
                    error: e.to_string(),
                }
            }
        };
        self.event_bus.emit(event);
        result
    }
}
