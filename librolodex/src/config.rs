//! Configuration management for Rolodex

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub contacts: ContactsConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsConfig {
    /// JSON file holding the device contact list
    pub source: String,
    /// Answer given when the contacts permission is requested
    #[serde(default = "default_true")]
    pub allow_access: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,
    #[serde(default = "default_profile_bio")]
    pub bio: String,
    #[serde(default = "default_library_dir")]
    pub library_dir: String,
    #[serde(default = "default_camera_dir")]
    pub camera_dir: String,
    #[serde(default = "default_true")]
    pub allow_library: bool,
    #[serde(default = "default_true")]
    pub allow_camera: bool,
}

fn default_true() -> bool {
    true
}

fn default_profile_name() -> String {
    "Wilfried BONY".to_string()
}

fn default_profile_bio() -> String {
    "Juste ME".to_string()
}

fn default_library_dir() -> String {
    "~/Pictures".to_string()
}

fn default_camera_dir() -> String {
    "~/.local/share/rolodex/camera".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            bio: default_profile_bio(),
            library_dir: default_library_dir(),
            camera_dir: default_camera_dir(),
            allow_library: true,
            allow_camera: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load from the default location, falling back to defaults when no
    /// config file exists yet
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default_config());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            contacts: ContactsConfig {
                source: "~/.local/share/rolodex/contacts.json".to_string(),
                allow_access: true,
            },
            profile: ProfileConfig::default(),
        }
    }

    /// Contacts source with `~` expanded
    pub fn contacts_source(&self) -> PathBuf {
        expand_path(&self.contacts.source)
    }

    /// Photo library root with `~` expanded
    pub fn library_dir(&self) -> PathBuf {
        expand_path(&self.profile.library_dir)
    }

    /// Camera output directory with `~` expanded
    pub fn camera_dir(&self) -> PathBuf {
        expand_path(&self.profile.camera_dir)
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("ROLODEX_CONFIG") {
        return Ok(expand_path(&path));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("rolodex").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("rolodex"))
}
