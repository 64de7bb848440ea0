//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Keyboard input is mapped
//! to higher-level actions by `reducer::map_key`; service events arrive as
//! actions through `event::service_action`.

use crossterm::event::KeyEvent;
use librolodex::forms::{ProfileField, RegistrationField};
use librolodex::service::events::MediaSource;
use librolodex::types::PickResult;
use librolodex::{ContactField, ContactRecord};

/// Actions that trigger state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    NavigateTo(Screen),
    Quit,
    ShowHelp,
    HideHelp,

    // === Registration ===
    /// Full new value of a registration field
    RegistrationInput {
        field: RegistrationField,
        value: String,
    },
    RegistrationFocus(RegistrationField),
    RegistrationToggleShowPassword,
    RegistrationToggleNightMode,
    RegistrationSubmit,

    // === Contacts ===
    ContactsLoadStarted,
    ContactsLoaded(Vec<ContactRecord>),
    ContactsPermissionDenied,
    ContactsLoadFailed(String),

    /// Edit of an existing row
    ContactFieldChanged {
        id: String,
        field: ContactField,
        value: String,
    },

    /// Edit of the "new contact" inputs
    NewContactInput {
        field: ContactField,
        value: String,
    },
    ContactAddRequested,
    ContactsFocus(ContactsFocus),

    // === Profile ===
    ProfileToggleEditing,
    ProfileInput {
        field: ProfileField,
        value: String,
    },
    ProfileFocus(ProfileField),
    /// User asked for a picture; the picker runs outside the reducer
    ProfilePickRequested(MediaSource),
    ProfilePictureResult(PickResult),
    ProfilePickFailed(String),
    ProfilePermissionDenied(MediaSource),
    ProfileSave,

    // === Error Handling ===
    ShowError(String),
    DismissError,

    // === Status Bar ===
    SetStatus(String),
    ClearStatus,
}

/// Screen identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Registration,
    Contacts,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Registration, Screen::Contacts, Screen::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Registration => "Register",
            Screen::Contacts => "Contacts",
            Screen::Profile => "Profile",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Screen::Registration => 0,
            Screen::Contacts => 1,
            Screen::Profile => 2,
        }
    }
}

/// Which input has the cursor on the contacts screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactsFocus {
    /// A field of the row at `index` in roster order
    Row { index: usize, field: ContactField },
    NewName,
    NewPhone,
}
