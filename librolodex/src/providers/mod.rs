//! Contact providers
//!
//! A provider stands in for the device contact store. Loading is a two-step
//! pipeline: ask for permission, then fetch everything. [`load_contacts`] is
//! the single place where the two steps are composed.
//!
//! ```no_run
//! use librolodex::providers::{load_contacts, LoadOutcome, file::FileContactsProvider};
//!
//! # async fn example() -> librolodex::Result<()> {
//! let provider = FileContactsProvider::new("contacts.json", true);
//! match load_contacts(&provider).await? {
//!     LoadOutcome::Loaded(records) => println!("{} contacts", records.len()),
//!     LoadOutcome::PermissionDenied => println!("no access"),
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ContactRecord, PermissionStatus};

pub mod file;

// Available outside tests so integration tests and the binaries' tests can use it
pub mod mock;

/// Access to a device contact store
#[async_trait]
pub trait ContactsProvider: Send + Sync {
    /// Short identifier used in logs (e.g. "file", "mock")
    fn name(&self) -> &str;

    /// Ask the host for read access to the contact store
    ///
    /// A refusal is `Ok(PermissionStatus::Denied)`. `Err` means the prompt
    /// itself could not be shown.
    async fn request_permission(&self) -> Result<PermissionStatus>;

    /// Read every contact from the store
    ///
    /// Only called after permission was granted.
    async fn fetch_all(&self) -> Result<Vec<ContactRecord>>;
}

/// Result of a completed load pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<ContactRecord>),
    PermissionDenied,
}

/// Request permission, then fetch if granted
///
/// Fetch failures are returned as errors. A denial is a normal outcome and
/// never triggers a fetch.
pub async fn load_contacts(provider: &dyn ContactsProvider) -> Result<LoadOutcome> {
    let status = provider.request_permission().await?;

    if !status.is_granted() {
        tracing::warn!(provider = provider.name(), "Contacts permission not granted");
        return Ok(LoadOutcome::PermissionDenied);
    }

    let records = provider.fetch_all().await.map_err(|e| {
        tracing::error!(provider = provider.name(), error = %e, "Error fetching contacts");
        e
    })?;

    if records.is_empty() {
        tracing::info!(provider = provider.name(), "Contact store is empty");
    } else {
        tracing::info!(provider = provider.name(), count = records.len(), "Fetched contacts");
    }

    Ok(LoadOutcome::Loaded(records))
}
