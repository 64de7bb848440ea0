//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//! - Event: Terminal polling and service event translation

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, ContactsFocus, Screen};
pub use reducer::{map_key, reduce};
pub use state::{AppState, LoadState, StatusBarState, UiConfig};
