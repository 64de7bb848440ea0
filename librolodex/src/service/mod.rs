//! Service layer for Rolodex
//!
//! `RolodexService` is the single entry point used by the TUI and the CLI.
//! It wires the configured collaborators (contacts provider, media picker)
//! to the sub-services and shares one event bus between them.
//!
//! - `ContactsService`: permission + fetch pipeline for the roster
//! - `ProfileService`: library and camera pickers for the profile picture
//! - `EventBus`: progress events for front ends
//!
//! # Example
//!
//! ```no_run
//! use librolodex::service::RolodexService;
//! use librolodex::providers::LoadOutcome;
//!
//! # async fn example() -> librolodex::Result<()> {
//! let service = RolodexService::new()?;
//!
//! let (roster, outcome) = service.contacts().load_roster().await?;
//! if outcome == LoadOutcome::PermissionDenied {
//!     eprintln!("Contacts permission not granted");
//! }
//! println!("{} contacts", roster.len());
//! # Ok(())
//! # }
//! ```

pub mod contacts;
pub mod events;
pub mod profile;

use std::sync::Arc;

use self::contacts::ContactsService;
use self::events::EventBus;
use self::profile::ProfileService;
use crate::media::directory::DirectoryPicker;
use crate::media::MediaPicker;
use crate::providers::file::FileContactsProvider;
use crate::providers::ContactsProvider;
use crate::{Config, Result};

/// Main service facade
pub struct RolodexService {
    config: Arc<Config>,
    contacts: ContactsService,
    profile: ProfileService,
    event_bus: EventBus,
}

impl RolodexService {
    /// Create a service from the default config location
    ///
    /// A missing config file falls back to defaults; an unreadable or
    /// malformed one is an error.
    pub fn new() -> Result<Self> {
        let config = Config::load_or_default()?;
        Ok(Self::from_config(config))
    }

    /// Create a service backed by the file provider and directory picker
    /// described in `config`
    pub fn from_config(config: Config) -> Self {
        let provider = Arc::new(FileContactsProvider::from_config(&config));
        let picker = Arc::new(DirectoryPicker::from_config(&config));
        Self::with_collaborators(config, provider, picker)
    }

    /// Create a service with explicit collaborators, for tests and embedding
    pub fn with_collaborators(
        config: Config,
        provider: Arc<dyn ContactsProvider>,
        picker: Arc<dyn MediaPicker>,
    ) -> Self {
        let event_bus = EventBus::new(100);

        Self {
            config: Arc::new(config),
            contacts: ContactsService::new(provider, event_bus.clone()),
            profile: ProfileService::new(picker, event_bus.clone()),
            event_bus,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn contacts(&self) -> &ContactsService {
        &self.contacts
    }

    pub fn profile(&self) -> &ProfileService {
        &self.profile
    }

    /// Subscribe to events from every sub-service
    pub fn subscribe(&self) -> events::EventReceiver {
        self.event_bus.subscribe()
    }
}
