//! Event system for progress tracking
//!
//! In-process event bus built on `tokio::sync::broadcast`. Services emit
//! events as the load pipeline and pickers progress; front ends subscribe and
//! redraw. Emitting with no subscribers drops the event.
//!
//! ```no_run
//! use librolodex::service::events::{EventBus, Event};
//!
//! # async fn example() {
//! let event_bus = EventBus::new(100);
//! let mut receiver = event_bus.subscribe();
//!
//! event_bus.emit(Event::ContactsLoadStarted {
//!     provider: "file".to_string(),
//! });
//!
//! if let Ok(event) = receiver.recv().await {
//!     println!("Received: {:?}", event);
//! }
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::ContactRecord;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Event bus for distributing service events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus
    ///
    /// `capacity` is how many events each subscriber can fall behind before
    /// the oldest are dropped.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events emitted from now on
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers without blocking
    pub fn emit(&self, event: Event) {
        // Err only means nobody is listening
        let _ = self.sender.send(event);
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Where a profile picture comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    Library,
    Camera,
}

impl std::fmt::Display for MediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaSource::Library => write!(f, "photo library"),
            MediaSource::Camera => write!(f, "camera"),
        }
    }
}

/// Events emitted by services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Permission request is about to be sent to the provider
    ContactsLoadStarted { provider: String },

    /// Pipeline finished; `records` may be empty
    ContactsLoaded { records: Vec<ContactRecord> },

    /// The host refused access to the contact store
    ContactsPermissionDenied,

    /// Permission or fetch failed outright
    ContactsLoadFailed { error: String },

    /// The host refused access to the library or camera
    MediaPermissionDenied { source: MediaSource },

    PictureSelected { source: MediaSource, uri: String },

    PictureCancelled { source: MediaSource },

    PictureFailed { source: MediaSource, error: String },
}
