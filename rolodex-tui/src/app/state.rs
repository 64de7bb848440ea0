//! Application state
//!
//! Cloneable state structure. All transitions happen through the reducer
//! (see `reducer.rs`). Each screen's state lives here for the lifetime of the
//! application and is dropped with it.

use librolodex::forms::{ProfileField, ProfileForm, RegistrationField, RegistrationForm};
use librolodex::RosterStore;

use super::actions::{Action, ContactsFocus, Screen};

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,

    pub current_screen: Screen,

    pub help_visible: bool,

    pub registration: RegistrationState,

    pub contacts: ContactsState,

    pub profile: ProfileState,

    pub status: StatusBarState,

    /// Error overlay
    pub error: Option<String>,

    pub config: UiConfig,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    pub focus: RegistrationField,
    /// Display name of the last successful registration
    pub registered: Option<String>,
}

/// Progress of the one-time contacts load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Denied,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ContactsState {
    pub roster: RosterStore,
    pub load: LoadState,
    pub focus: ContactsFocus,
    pub new_name: String,
    pub new_phone: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub focus: ProfileField,
    /// A picker is open
    pub picking: bool,
    /// Library access was asked for on the first visit
    pub permission_requested: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            current_screen: Screen::Registration,
            help_visible: false,
            registration: RegistrationState::default(),
            contacts: ContactsState::default(),
            profile: ProfileState::default(),
            status: StatusBarState::default(),
            error: None,
            config: UiConfig::default(),
        }
    }
}

impl Default for ContactsState {
    fn default() -> Self {
        Self {
            roster: RosterStore::new(),
            load: LoadState::Pending,
            focus: ContactsFocus::NewName,
            new_name: String::new(),
            new_phone: String::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("ROLODEX_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("ROLODEX_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a profile taken from configuration
    pub fn with_profile(profile: ProfileForm) -> Self {
        Self {
            profile: ProfileState {
                form: profile,
                ..ProfileState::default()
            },
            ..Self::default()
        }
    }

    /// An overlay is capturing input
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.error.is_some()
    }

    /// `action` is the first visit to the profile screen, which asks for
    /// photo library access
    pub fn requests_library_permission(&self, action: &Action) -> bool {
        matches!(action, Action::NavigateTo(Screen::Profile)) && !self.profile.permission_requested
    }

    /// A picker may be opened right now
    pub fn can_pick(&self) -> bool {
        self.profile.form.editing && !self.profile.picking
    }
}

impl ContactsState {
    /// Id of the row under the cursor, if the cursor is on a row
    pub fn focused_id(&self) -> Option<&str> {
        match self.focus {
            ContactsFocus::Row { index, .. } => {
                self.roster.records().get(index).map(|r| r.id.as_str())
            }
            _ => None,
        }
    }
}
