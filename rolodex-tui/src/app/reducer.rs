//! Reducer and keymap
//!
//! `reduce` is `(State, Action) -> State` with no I/O: contacts loading and
//! picture selection happen in the event loop, which feeds their results
//! back as actions. `map_key` turns raw keys into actions for the current
//! screen and is shared by the reducer and the event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use librolodex::forms::{ProfileField, RegistrationField};
use librolodex::service::events::MediaSource;
use librolodex::service::profile::LIBRARY_PERMISSION_NOTICE;
use librolodex::ContactField;

use super::actions::{Action, ContactsFocus, Screen};
use super::state::{AppState, LoadState};

/// Shown when the camera permission is refused
pub const CAMERA_PERMISSION_NOTICE: &str = "Sorry, we need camera permissions to make this work!";

/// Pure reducer function
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => match map_key(&state, key) {
            Some(action) => reduce(state, action),
            None => state,
        },
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation ===
        Action::NavigateTo(screen) => {
            let mut state = state;
            state.current_screen = screen;
            if screen == Screen::Profile {
                state.profile.permission_requested = true;
            }
            state
        }

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Registration ===
        Action::RegistrationInput { field, value } => {
            let mut state = state;
            state.registration.form.set(field, value);
            state
        }

        Action::RegistrationFocus(field) => {
            let mut state = state;
            state.registration.focus = field;
            state
        }

        Action::RegistrationToggleShowPassword => {
            let mut state = state;
            state.registration.form.toggle_show_password();
            state
        }

        Action::RegistrationToggleNightMode => {
            let mut state = state;
            state.registration.form.toggle_night_mode();
            state
        }

        Action::RegistrationSubmit => {
            let mut state = state;
            // A failed submit leaves its message on the form
            if let Ok(registration) = state.registration.form.submit() {
                let name = registration.display_name();
                state.status.message = Some(format!("Welcome, {}!", name));
                state.registration.registered = Some(name);
                state.registration.focus = RegistrationField::FirstName;
                state.current_screen = Screen::Contacts;
            }
            state
        }

        // === Contacts ===
        Action::ContactsLoadStarted => {
            let mut state = state;
            state.status.message = Some("Loading contacts...".to_string());
            state
        }

        Action::ContactsLoaded(records) => {
            let mut state = state;
            state.contacts.roster.load(records);
            state.contacts.load = LoadState::Loaded;
            state.status.message = Some(match state.contacts.roster.len() {
                0 => "No contacts on this device".to_string(),
                1 => "Loaded 1 contact".to_string(),
                n => format!("Loaded {} contacts", n),
            });
            if let ContactsFocus::Row { index, .. } = state.contacts.focus {
                if index >= state.contacts.roster.len() {
                    state.contacts.focus = ContactsFocus::NewName;
                }
            }
            state
        }

        Action::ContactsPermissionDenied => {
            let mut state = state;
            state.contacts.load = LoadState::Denied;
            state.status.message = Some("Contacts permission not granted".to_string());
            state
        }

        Action::ContactsLoadFailed(error) => {
            let mut state = state;
            state.error = Some(format!("Error fetching contacts: {}", error));
            state.contacts.load = LoadState::Failed(error);
            state
        }

        Action::ContactFieldChanged { id, field, value } => {
            let mut state = state;
            state.contacts.roster.update_field(&id, field, value);
            state
        }

        Action::NewContactInput { field, value } => {
            let mut state = state;
            match field {
                ContactField::Name => state.contacts.new_name = value,
                ContactField::PhoneNumber => state.contacts.new_phone = value,
            }
            state
        }

        Action::ContactAddRequested => {
            let mut state = state;
            let name = std::mem::take(&mut state.contacts.new_name);
            let phone = std::mem::take(&mut state.contacts.new_phone);
            let record = state.contacts.roster.add(name, phone);
            state.status.message = Some(format!("Added contact #{}", record.id));
            state
        }

        Action::ContactsFocus(focus) => {
            let mut state = state;
            state.contacts.focus = focus;
            state
        }

        // === Profile ===
        Action::ProfileToggleEditing => {
            let mut state = state;
            state.profile.form.toggle_editing();
            state.profile.focus = ProfileField::Name;
            state
        }

        Action::ProfileInput { field, value } => {
            let mut state = state;
            state.profile.form.set(field, value);
            state
        }

        Action::ProfileFocus(field) => {
            let mut state = state;
            state.profile.focus = field;
            state
        }

        Action::ProfilePickRequested(_) => {
            let mut state = state;
            if state.can_pick() {
                state.profile.picking = true;
            }
            state
        }

        Action::ProfilePictureResult(result) => {
            let mut state = state;
            state.profile.picking = false;
            if state.profile.form.apply_pick(result) {
                state.status.message = Some("Profile picture updated".to_string());
            }
            state
        }

        Action::ProfilePickFailed(error) => {
            let mut state = state;
            state.profile.picking = false;
            state.error = Some(error);
            state
        }

        Action::ProfilePermissionDenied(source) => {
            let mut state = state;
            state.profile.picking = false;
            state.error = Some(match source {
                MediaSource::Library => LIBRARY_PERMISSION_NOTICE.to_string(),
                MediaSource::Camera => CAMERA_PERMISSION_NOTICE.to_string(),
            });
            state
        }

        Action::ProfileSave => {
            let mut state = state;
            state.profile.form.save();
            state.status.message = Some("Profile saved".to_string());
            state
        }

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState { error: None, ..state },

        // === Status Bar ===
        Action::SetStatus(message) => {
            let mut state = state;
            state.status.message = Some(message);
            state
        }

        Action::ClearStatus => {
            let mut state = state;
            state.status.message = None;
            state
        }
    }
}

/// Map a key press to an action for the current state
///
/// Returns `None` for keys with no meaning here. Global keys work on every
/// screen; screen keys are ignored while an overlay is open.
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::CONTROL) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        (KeyCode::F(1), _) => {
            return Some(if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            });
        }
        (KeyCode::F(2), _) => return Some(Action::NavigateTo(Screen::Registration)),
        (KeyCode::F(3), _) => return Some(Action::NavigateTo(Screen::Contacts)),
        (KeyCode::F(4), _) => return Some(Action::NavigateTo(Screen::Profile)),
        (KeyCode::Esc, _) if state.error.is_some() => return Some(Action::DismissError),
        (KeyCode::Esc, _) if state.help_visible => return Some(Action::HideHelp),
        _ => {}
    }

    if state.overlay_visible() {
        return None;
    }

    match state.current_screen {
        Screen::Registration => map_registration_key(state, key),
        Screen::Contacts => map_contacts_key(state, key),
        Screen::Profile => map_profile_key(state, key),
    }
}

/// A single-character edit of a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Push(char),
    Pop,
}

fn text_edit(key: KeyEvent) -> Option<Edit> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(Edit::Push(c))
        }
        KeyCode::Backspace => Some(Edit::Pop),
        _ => None,
    }
}

fn apply_edit(current: &str, edit: Edit) -> String {
    let mut value = current.to_string();
    match edit {
        Edit::Push(c) => value.push(c),
        Edit::Pop => {
            value.pop();
        }
    }
    value
}

fn map_registration_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    let focus = state.registration.focus;

    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => Some(Action::RegistrationSubmit),
        (KeyCode::Tab, _) | (KeyCode::Down, _) => Some(Action::RegistrationFocus(focus.next())),
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Some(Action::RegistrationFocus(focus.prev())),
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Some(Action::RegistrationToggleShowPassword),
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Some(Action::RegistrationToggleNightMode),
        _ => text_edit(key).map(|edit| Action::RegistrationInput {
            field: focus,
            value: apply_edit(state.registration.form.value(focus), edit),
        }),
    }
}

fn contacts_focus_down(focus: ContactsFocus, rows: usize) -> ContactsFocus {
    match focus {
        ContactsFocus::Row { index, field } if index + 1 < rows => ContactsFocus::Row {
            index: index + 1,
            field,
        },
        ContactsFocus::Row { .. } => ContactsFocus::NewName,
        ContactsFocus::NewName => ContactsFocus::NewPhone,
        ContactsFocus::NewPhone => ContactsFocus::NewPhone,
    }
}

fn contacts_focus_up(focus: ContactsFocus, rows: usize) -> ContactsFocus {
    match focus {
        ContactsFocus::Row { index, field } if index > 0 => ContactsFocus::Row {
            index: index - 1,
            field,
        },
        ContactsFocus::Row { .. } => focus,
        ContactsFocus::NewName if rows > 0 => ContactsFocus::Row {
            index: rows - 1,
            field: ContactField::Name,
        },
        ContactsFocus::NewName => ContactsFocus::NewName,
        ContactsFocus::NewPhone => ContactsFocus::NewName,
    }
}

fn map_contacts_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    let contacts = &state.contacts;
    let rows = contacts.roster.len();
    let focus = contacts.focus;

    match key.code {
        KeyCode::Up => Some(Action::ContactsFocus(contacts_focus_up(focus, rows))),
        KeyCode::Down => Some(Action::ContactsFocus(contacts_focus_down(focus, rows))),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ContactsFocus(match focus {
            ContactsFocus::Row { index, field } => ContactsFocus::Row {
                index,
                field: field.next(),
            },
            ContactsFocus::NewName => ContactsFocus::NewPhone,
            ContactsFocus::NewPhone => ContactsFocus::NewName,
        })),
        KeyCode::Enter => match focus {
            ContactsFocus::NewName | ContactsFocus::NewPhone => Some(Action::ContactAddRequested),
            ContactsFocus::Row { .. } => Some(Action::ContactsFocus(contacts_focus_down(focus, rows))),
        },
        _ => {
            let edit = text_edit(key)?;
            match focus {
                ContactsFocus::Row { index, field } => {
                    let record = contacts.roster.records().get(index)?;
                    Some(Action::ContactFieldChanged {
                        id: record.id.clone(),
                        field,
                        value: apply_edit(record.field(field), edit),
                    })
                }
                ContactsFocus::NewName => Some(Action::NewContactInput {
                    field: ContactField::Name,
                    value: apply_edit(&contacts.new_name, edit),
                }),
                ContactsFocus::NewPhone => Some(Action::NewContactInput {
                    field: ContactField::PhoneNumber,
                    value: apply_edit(&contacts.new_phone, edit),
                }),
            }
        }
    }
}

fn map_profile_key(state: &AppState, key: KeyEvent) -> Option<Action> {
    let profile = &state.profile;

    if let (KeyCode::Char('e'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return Some(Action::ProfileToggleEditing);
    }

    if !profile.form.editing {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => {
            Some(Action::ProfilePickRequested(MediaSource::Library))
        }
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            Some(Action::ProfilePickRequested(MediaSource::Camera))
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Some(Action::ProfileSave),
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) | (KeyCode::Up, _) | (KeyCode::Down, _) => {
            Some(Action::ProfileFocus(profile.focus.next()))
        }
        (KeyCode::Enter, _) if profile.focus == ProfileField::Bio => Some(Action::ProfileInput {
            field: ProfileField::Bio,
            value: apply_edit(&profile.form.bio, Edit::Push('\n')),
        }),
        (KeyCode::Enter, _) => Some(Action::ProfileFocus(ProfileField::Bio)),
        _ => text_edit(key).map(|edit| Action::ProfileInput {
            field: profile.focus,
            value: apply_edit(profile.form.value(profile.focus), edit),
        }),
    }
}
