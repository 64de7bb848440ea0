//! JSON-file contact store
//!
//! The file holds a JSON array of `{"id", "name", "phoneNumber"}` objects.
//! A missing file is an empty store, not an error.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ProviderError, Result};
use crate::providers::ContactsProvider;
use crate::types::{ContactRecord, PermissionStatus};

pub struct FileContactsProvider {
    path: PathBuf,
    allow_access: bool,
}

impl FileContactsProvider {
    pub fn new(path: impl Into<PathBuf>, allow_access: bool) -> Self {
        Self {
            path: path.into(),
            allow_access,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.contacts_source(), config.contacts.allow_access)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContactsProvider for FileContactsProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::from_granted(self.allow_access))
    }

    async fn fetch_all(&self) -> Result<Vec<ContactRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Contacts file not found");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ProviderError::Fetch(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                ))
                .into())
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<ContactRecord> = serde_json::from_str(&content).map_err(|e| {
            ProviderError::Parse(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_records_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(
            &path,
            r#"[
                {"id": "2", "name": "Ben", "phoneNumber": "555-0200"},
                {"id": "1", "name": "Amy", "phoneNumber": "555-0100"}
            ]"#,
        )
        .unwrap();

        let provider = FileContactsProvider::new(&path, true);
        let records = provider.fetch_all().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "2");
        assert_eq!(records[1].phone_number, "555-0100");
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let provider = FileContactsProvider::new(dir.path().join("nope.json"), true);

        assert!(provider.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, "\n").unwrap();

        let provider = FileContactsProvider::new(&path, true);
        assert!(provider.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, r#"{"id": "1"}"#).unwrap();

        let provider = FileContactsProvider::new(&path, true);
        let err = provider.fetch_all().await.unwrap_err();

        assert!(err.to_string().contains("Malformed contact data"));
    }

    #[tokio::test]
    async fn test_permission_follows_config() {
        let granted = FileContactsProvider::new("/tmp/x.json", true);
        let denied = FileContactsProvider::new("/tmp/x.json", false);

        assert_eq!(granted.request_permission().await.unwrap(), PermissionStatus::Granted);
        assert_eq!(denied.request_permission().await.unwrap(), PermissionStatus::Denied);
    }
}
