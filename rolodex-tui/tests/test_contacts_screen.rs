//! Contacts screen flow through the reducer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use librolodex::{ContactField, ContactRecord};
use rolodex_tui::app::{reduce, Action, AppState, ContactsFocus, LoadState, Screen};

fn contacts_screen() -> AppState {
    let mut state = AppState::new();
    state.current_screen = Screen::Contacts;
    state
}

fn key(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn type_text(mut state: AppState, text: &str) -> AppState {
    for c in text.chars() {
        state = key(state, KeyCode::Char(c));
    }
    state
}

fn sample() -> Vec<ContactRecord> {
    vec![
        ContactRecord::new("1", "Amy", "555-0100"),
        ContactRecord::new("2", "Ben", "555-0200"),
    ]
}

#[test]
fn test_loaded_records_shown_in_order() {
    let state = reduce(contacts_screen(), Action::ContactsLoaded(sample()));

    assert_eq!(state.contacts.load, LoadState::Loaded);
    assert_eq!(state.contacts.roster.records(), sample().as_slice());
    assert_eq!(state.status.message.as_deref(), Some("Loaded 2 contacts"));
}

#[test]
fn test_empty_and_denied_are_distinct() {
    let empty = reduce(contacts_screen(), Action::ContactsLoaded(Vec::new()));
    let denied = reduce(contacts_screen(), Action::ContactsPermissionDenied);

    assert_eq!(empty.contacts.load, LoadState::Loaded);
    assert_eq!(denied.contacts.load, LoadState::Denied);
    assert!(empty.contacts.roster.is_empty());
    assert!(denied.contacts.roster.is_empty());
    assert_ne!(empty.status.message, denied.status.message);
}

#[test]
fn test_load_failure_shows_error() {
    let state = reduce(
        contacts_screen(),
        Action::ContactsLoadFailed("offline".to_string()),
    );

    assert_eq!(state.contacts.load, LoadState::Failed("offline".to_string()));
    assert_eq!(
        state.error.as_deref(),
        Some("Error fetching contacts: offline")
    );
}

#[test]
fn test_enter_on_new_inputs_adds_and_clears() {
    let state = reduce(contacts_screen(), Action::ContactsLoaded(sample()));
    let state = type_text(state, "Cat");
    let state = key(state, KeyCode::Tab);
    let state = type_text(state, "555-0300");
    let state = key(state, KeyCode::Enter);

    let records = state.contacts.roster.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].name, "Cat");
    assert_eq!(records[2].phone_number, "555-0300");
    assert!(records[2].id != "1" && records[2].id != "2");
    assert!(state.contacts.new_name.is_empty());
    assert!(state.contacts.new_phone.is_empty());
}

#[test]
fn test_add_works_after_denial() {
    let state = reduce(contacts_screen(), Action::ContactsPermissionDenied);
    let state = type_text(state, "Solo");
    let state = key(state, KeyCode::Enter);

    assert_eq!(state.contacts.roster.len(), 1);
    assert_eq!(state.contacts.load, LoadState::Denied);
}

#[test]
fn test_editing_row_updates_record() {
    let state = reduce(contacts_screen(), Action::ContactsLoaded(sample()));

    // From the new-contact inputs, Up lands on the last row
    let state = key(state, KeyCode::Up);
    assert_eq!(
        state.contacts.focus,
        ContactsFocus::Row {
            index: 1,
            field: ContactField::Name
        }
    );

    let state = key(state, KeyCode::Tab);
    let state = key(state, KeyCode::Backspace);
    let state = type_text(state, "9");

    assert_eq!(
        state.contacts.roster.get("2"),
        Some(&ContactRecord::new("2", "Ben", "555-0209"))
    );
    assert_eq!(
        state.contacts.roster.get("1"),
        Some(&ContactRecord::new("1", "Amy", "555-0100"))
    );
}

#[test]
fn test_change_for_unknown_id_is_ignored() {
    let state = reduce(contacts_screen(), Action::ContactsLoaded(sample()));
    let before = state.contacts.roster.clone();

    let state = reduce(
        state,
        Action::ContactFieldChanged {
            id: "404".to_string(),
            field: ContactField::Name,
            value: "Ghost".to_string(),
        },
    );

    assert_eq!(state.contacts.roster, before);
}
