//! Directory-backed picker
//!
//! The photo library is a directory of images; the first supported image by
//! file name is "chosen". The camera is a directory where the sensor drops its
//! latest frame as `frame.<ext>`; capturing copies it to a timestamped file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{MediaError, Result};
use crate::media::MediaPicker;
use crate::types::{ImageMimeType, PermissionStatus, PickOptions, PickResult};

pub struct DirectoryPicker {
    library_dir: PathBuf,
    camera_dir: PathBuf,
    allow_library: bool,
    allow_camera: bool,
}

impl DirectoryPicker {
    pub fn new(library_dir: impl Into<PathBuf>, camera_dir: impl Into<PathBuf>) -> Self {
        Self {
            library_dir: library_dir.into(),
            camera_dir: camera_dir.into(),
            allow_library: true,
            allow_camera: true,
        }
    }

    pub fn with_permissions(mut self, allow_library: bool, allow_camera: bool) -> Self {
        self.allow_library = allow_library;
        self.allow_camera = allow_camera;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.library_dir(), config.camera_dir())
            .with_permissions(config.profile.allow_library, config.profile.allow_camera)
    }

    /// Supported images in `dir`, sorted by file name
    async fn images_in(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(MediaError::Io(format!("{}: {}", dir.display(), e)).into()),
        };

        let mut images = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| MediaError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.is_file() && ImageMimeType::from_path(&path).is_some() {
                images.push(path);
            }
        }
        images.sort();
        Ok(images)
    }

    async fn latest_frame(&self) -> Result<Option<(PathBuf, ImageMimeType)>> {
        let frames = Self::images_in(&self.camera_dir).await?;
        Ok(frames.into_iter().find_map(|path| {
            let is_frame = path.file_stem().and_then(|s| s.to_str()) == Some("frame");
            let mime = ImageMimeType::from_path(&path)?;
            is_frame.then_some((path, mime))
        }))
    }
}

#[async_trait]
impl MediaPicker for DirectoryPicker {
    fn name(&self) -> &str {
        "directory"
    }

    async fn request_library_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::from_granted(self.allow_library))
    }

    async fn request_camera_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::from_granted(self.allow_camera))
    }

    async fn pick_from_library(&self, options: PickOptions) -> Result<PickResult> {
        if !self.allow_library {
            return Err(MediaError::PermissionDenied("photo library".to_string()).into());
        }

        tracing::debug!(dir = %self.library_dir.display(), ?options, "Picking from library");

        match Self::images_in(&self.library_dir).await?.into_iter().next() {
            Some(path) => Ok(PickResult::Picked {
                uri: path.display().to_string(),
            }),
            None => Ok(PickResult::Cancelled),
        }
    }

    async fn capture_from_camera(&self, options: PickOptions) -> Result<PickResult> {
        if !self.allow_camera {
            return Err(MediaError::PermissionDenied("camera".to_string()).into());
        }

        tracing::debug!(dir = %self.camera_dir.display(), ?options, "Capturing from camera");

        let Some((frame, mime)) = self.latest_frame().await? else {
            return Ok(PickResult::Cancelled);
        };

        let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%3f");
        let target = self
            .camera_dir
            .join(format!("IMG_{}.{}", stamp, mime.extension()));

        tokio::fs::copy(&frame, &target)
            .await
            .map_err(|e| MediaError::Io(format!("{}: {}", target.display(), e)))?;

        Ok(PickResult::Picked {
            uri: target.display().to_string(),
        })
    }
}
