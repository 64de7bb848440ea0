//! Event handling infrastructure
//!
//! Merges UI events (keyboard, resize, tick) with service events from the
//! EventBus into a unified action stream.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use librolodex::service::events::Event;
use librolodex::types::PickResult;

use crate::app::Action;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick
    Tick,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => Action::Key(key),
            TuiEvent::Resize(w, h) => Action::Resize(w, h),
            TuiEvent::Tick => Action::Tick,
        }
    }
}

/// Translate a service event into the action that records it
pub fn service_action(event: Event) -> Action {
    match event {
        Event::ContactsLoadStarted { .. } => Action::ContactsLoadStarted,
        Event::ContactsLoaded { records } => Action::ContactsLoaded(records),
        Event::ContactsPermissionDenied => Action::ContactsPermissionDenied,
        Event::ContactsLoadFailed { error } => Action::ContactsLoadFailed(error),
        Event::MediaPermissionDenied { source } => Action::ProfilePermissionDenied(source),
        Event::PictureSelected { uri, .. } => Action::ProfilePictureResult(PickResult::Picked { uri }),
        Event::PictureCancelled { .. } => Action::ProfilePictureResult(PickResult::Cancelled),
        Event::PictureFailed { source, error } => {
            Action::ProfilePickFailed(format!("Could not get a picture from the {}: {}", source, error))
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to tick_rate duration
    ///
    /// A timeout yields `TuiEvent::Tick`, so the caller gets a chance to
    /// drain service events at least once per tick.
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(TuiEvent::Key(key)),
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}
