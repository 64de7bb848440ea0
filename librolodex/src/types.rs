//! Core types for Rolodex

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single entry of the contact roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    pub phone_number: String,
}

impl ContactRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Read one editable field
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::PhoneNumber => &self.phone_number,
        }
    }

    pub(crate) fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::PhoneNumber => &mut self.phone_number,
        }
    }
}

/// Fields of a contact that can be edited after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    PhoneNumber,
}

impl ContactField {
    /// The other field, used for Tab cycling in editors
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::PhoneNumber,
            ContactField::PhoneNumber => ContactField::Name,
        }
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(ContactField::Name),
            "phone" | "phonenumber" | "phone_number" => Ok(ContactField::PhoneNumber),
            _ => Err(format!(
                "Invalid contact field: '{}'. Valid options: name, phone",
                s
            )),
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactField::Name => write!(f, "name"),
            ContactField::PhoneNumber => write!(f, "phoneNumber"),
        }
    }
}

/// Answer to a permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn from_granted(granted: bool) -> Self {
        if granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

// ============================================================================
// Media Types
// ============================================================================

/// Supported image MIME types for profile pictures
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageMimeType {
    Jpeg,
    Png,
    Gif,
    WebP,
}

impl ImageMimeType {
    /// Detect MIME type from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// Detect MIME type from a path's extension
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_mime_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::WebP => "webp",
        }
    }
}

/// Options passed to the photo library or camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickOptions {
    pub allows_editing: bool,
    /// Crop aspect ratio (width, height)
    pub aspect: (u16, u16),
    /// Compression quality in 0.0..=1.0
    pub quality: f32,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            allows_editing: true,
            aspect: (1, 1),
            quality: 1.0,
        }
    }
}

/// Outcome of a picker interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PickResult {
    Picked { uri: String },
    Cancelled,
}
