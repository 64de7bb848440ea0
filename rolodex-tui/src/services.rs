//! Service layer adapter for TUI
//!
//! Bridges the async `RolodexService` and the synchronous TUI event loop.
//!
//! # Architecture
//!
//! - `ServiceHandle`: Wraps RolodexService and owns a tokio runtime
//! - Events: a task forwards the tokio broadcast channel into a crossbeam
//!   channel the event loop drains with `try_recv`
//! - Side effects (contacts load, permission prompts, pickers) are spawned on
//!   the runtime; their outcomes arrive only as events
//!
//! # Example
//!
//! ```no_run
//! use rolodex_tui::services::ServiceHandle;
//!
//! # fn example() -> rolodex_tui::error::Result<()> {
//! let services = ServiceHandle::new()?;
//! services.spawn_load_contacts();
//!
//! // In event loop, check for events
//! while let Ok(event) = services.events().try_recv() {
//!     // Handle event
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver};
use librolodex::service::events::{Event, MediaSource};
use librolodex::service::RolodexService;
use librolodex::Config;
use tokio::sync::broadcast::error::RecvError;

use crate::error::Result;

/// Service handle for TUI operations
pub struct ServiceHandle {
    service: Arc<RolodexService>,
    runtime: tokio::runtime::Runtime,
    events: Receiver<Event>,
}

impl ServiceHandle {
    /// Create a service handle from the default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read or parsed
    /// - Tokio runtime cannot be created
    pub fn new() -> Result<Self> {
        let service = RolodexService::new()?;
        Self::with_service(service)
    }

    /// Wrap an already configured service
    pub fn with_service(service: RolodexService) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let service = Arc::new(service);

        // Subscribe before anything is spawned so no event is missed
        let mut event_rx = service.subscribe();
        let (tx, rx) = unbounded();

        runtime.spawn(async move {
            loop {
                match event_rx.recv().await {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            // Receiver dropped, stop forwarding
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Event receiver lagged, skipped {} events", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        Ok(Self {
            service,
            runtime,
            events: rx,
        })
    }

    pub fn config(&self) -> &Config {
        self.service.config()
    }

    /// Service events, in emission order
    pub fn events(&self) -> &Receiver<Event> {
        &self.events
    }

    /// Run the permission + fetch pipeline in the background
    ///
    /// The outcome arrives as `ContactsLoaded`, `ContactsPermissionDenied`
    /// or `ContactsLoadFailed`.
    pub fn spawn_load_contacts(&self) {
        let service = Arc::clone(&self.service);
        self.runtime.spawn(async move {
            if let Err(e) = service.contacts().load().await {
                tracing::debug!(error = %e, "Contacts load task finished with error");
            }
        });
    }

    /// Ask for photo library access, as the profile screen does on start
    ///
    /// A denial arrives as `MediaPermissionDenied`.
    pub fn spawn_library_permission(&self) {
        let service = Arc::clone(&self.service);
        self.runtime.spawn(async move {
            if let Err(e) = service.profile().request_library_permission().await {
                tracing::error!(error = %e, "Photo library permission request failed");
            }
        });
    }

    /// Open the picker for `source` in the background
    pub fn spawn_pick(&self, source: MediaSource) {
        let service = Arc::clone(&self.service);
        self.runtime.spawn(async move {
            let result = match source {
                MediaSource::Library => service.profile().pick_picture().await,
                MediaSource::Camera => service.profile().take_picture().await,
            };
            if let Err(e) = result {
                tracing::debug!(%source, error = %e, "Pick task finished with error");
            }
        });
    }
}
