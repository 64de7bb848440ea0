//! Rendering smoke tests against ratatui's TestBackend

use librolodex::forms::{ProfileForm, RegistrationField};
use librolodex::{ContactField, ContactRecord};
use ratatui::{backend::TestBackend, Terminal};
use rolodex_tui::app::{reduce, Action, AppState, ContactsFocus, Screen};
use rolodex_tui::ui;

/// Draw `state` and return the screen as text
fn draw(state: &AppState) -> String {
    draw_sized(state, 100, 40)
}

fn draw_sized(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_registration_masks_password() {
    let state = reduce(
        AppState::new(),
        Action::RegistrationInput {
            field: RegistrationField::Password,
            value: "hunter2".to_string(),
        },
    );

    let screen = draw(&state);

    assert!(screen.contains("Confirm Password"));
    assert!(screen.contains("•••••••"));
    assert!(!screen.contains("hunter2"));
}

#[test]
fn test_registration_error_message_drawn() {
    let state = reduce(AppState::new(), Action::RegistrationSubmit);

    assert!(draw(&state).contains("Please fill in all fields."));
}

#[test]
fn test_contacts_rows_drawn() {
    let mut state = AppState::new();
    state.current_screen = Screen::Contacts;
    let state = reduce(
        state,
        Action::ContactsLoaded(vec![
            ContactRecord::new("1", "Amy", "555-0100"),
            ContactRecord::new("2", "Ben", "555-0200"),
        ]),
    );

    let screen = draw(&state);

    assert!(screen.contains("Amy"));
    assert!(screen.contains("555-0200"));
    assert!(screen.contains("Contacts (2)"));
}

#[test]
fn test_focused_row_scrolled_into_view() {
    let mut state = AppState::new();
    state.current_screen = Screen::Contacts;
    let records = (1..=40)
        .map(|i| ContactRecord::new(i.to_string(), format!("Person{:02}", i), "555-0100"))
        .collect();
    let state = reduce(state, Action::ContactsLoaded(records));

    let top = draw_sized(&state, 80, 24);
    assert!(top.contains("Person01"));
    assert!(!top.contains("Person40"));

    let state = reduce(
        state,
        Action::ContactsFocus(ContactsFocus::Row {
            index: 39,
            field: ContactField::Name,
        }),
    );
    let bottom = draw_sized(&state, 80, 24);

    assert!(bottom.contains("Person40"));
    assert!(!bottom.contains("Person05"));
}

#[test]
fn test_denied_contacts_notice_drawn() {
    let mut state = AppState::new();
    state.current_screen = Screen::Contacts;
    let state = reduce(state, Action::ContactsPermissionDenied);

    assert!(draw(&state).contains("Contacts permission not granted"));
}

#[test]
fn test_profile_shows_initial_without_picture() {
    let mut state = AppState::with_profile(ProfileForm::new("wilfried", "Juste ME"));
    state.current_screen = Screen::Profile;

    let screen = draw(&state);

    assert!(screen.contains("( W )"));
    assert!(screen.contains("Juste ME"));
}

#[test]
fn test_help_overlay_drawn() {
    let state = reduce(AppState::new(), Action::ShowHelp);

    assert!(draw(&state).contains("Keyboard Shortcuts"));
}
