//! Contacts loading service

use std::sync::Arc;

use crate::error::Result;
use crate::providers::{load_contacts, ContactsProvider, LoadOutcome};
use crate::roster::RosterStore;
use crate::service::events::{Event, EventBus};

/// Runs the permission + fetch pipeline and reports progress on the bus
#[derive(Clone)]
pub struct ContactsService {
    provider: Arc<dyn ContactsProvider>,
    event_bus: EventBus,
}

impl ContactsService {
    pub fn new(provider: Arc<dyn ContactsProvider>, event_bus: EventBus) -> Self {
        Self {
            provider,
            event_bus,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Load the initial snapshot
    ///
    /// Emits `ContactsLoadStarted` and then exactly one of `ContactsLoaded`,
    /// `ContactsPermissionDenied` or `ContactsLoadFailed`.
    pub async fn load(&self) -> Result<LoadOutcome> {
        self.event_bus.emit(Event::ContactsLoadStarted {
            provider: self.provider.name().to_string(),
        });

        match load_contacts(self.provider.as_ref()).await {
            Ok(LoadOutcome::Loaded(records)) => {
                self.event_bus.emit(Event::ContactsLoaded {
                    records: records.clone(),
                });
                Ok(LoadOutcome::Loaded(records))
            }
            Ok(LoadOutcome::PermissionDenied) => {
                self.event_bus.emit(Event::ContactsPermissionDenied);
                Ok(LoadOutcome::PermissionDenied)
            }
            Err(e) => {
                self.event_bus.emit(Event::ContactsLoadFailed {
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Load and build a roster in one step
    ///
    /// A denial yields an empty roster together with the outcome so callers
    /// can still tell it apart from an empty store.
    pub async fn load_roster(&self) -> Result<(RosterStore, LoadOutcome)> {
        let outcome = self.load().await?;
        let mut roster = RosterStore::new();
        if let LoadOutcome::Loaded(records) = &outcome {
            roster.load(records.clone());
        }
        Ok((roster, outcome))
    }
}
