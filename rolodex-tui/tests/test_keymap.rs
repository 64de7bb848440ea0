//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to actions
//! through the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use librolodex::service::events::MediaSource;
use rolodex_tui::app::{map_key, reduce, Action, AppState, Screen};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode, modifiers: KeyModifiers) -> AppState {
    reduce(state, Action::Key(key_event(code, modifiers)))
}

#[test]
fn test_ctrl_q_quits_application() {
    let state = press(AppState::new(), KeyCode::Char('q'), KeyModifiers::CONTROL);

    assert!(state.should_quit);
}

#[test]
fn test_plain_q_is_text_not_quit() {
    let state = press(AppState::new(), KeyCode::Char('q'), KeyModifiers::NONE);

    assert!(!state.should_quit);
    assert_eq!(
        state.registration.form.value(librolodex::forms::RegistrationField::FirstName),
        "q"
    );
}

#[test]
fn test_f1_toggles_help() {
    let state = press(AppState::new(), KeyCode::F(1), KeyModifiers::NONE);
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1), KeyModifiers::NONE);
    assert!(!state.help_visible);
}

#[test]
fn test_esc_closes_help() {
    let state = press(AppState::new(), KeyCode::F(1), KeyModifiers::NONE);
    let state = press(state, KeyCode::Esc, KeyModifiers::NONE);

    assert!(!state.help_visible);
}

#[test]
fn test_function_keys_switch_screens() {
    let state = press(AppState::new(), KeyCode::F(3), KeyModifiers::NONE);
    assert_eq!(state.current_screen, Screen::Contacts);

    let state = press(state, KeyCode::F(4), KeyModifiers::NONE);
    assert_eq!(state.current_screen, Screen::Profile);

    let state = press(state, KeyCode::F(2), KeyModifiers::NONE);
    assert_eq!(state.current_screen, Screen::Registration);
}

#[test]
fn test_error_overlay_blocks_screen_keys() {
    let state = reduce(AppState::new(), Action::ShowError("boom".to_string()));

    let key = key_event(KeyCode::Char('a'), KeyModifiers::NONE);
    assert_eq!(map_key(&state, key), None);

    let state = press(state, KeyCode::Esc, KeyModifiers::NONE);
    assert!(state.error.is_none());
}

#[test]
fn test_global_keys_work_under_overlay() {
    let state = reduce(AppState::new(), Action::ShowError("boom".to_string()));
    let state = press(state, KeyCode::Char('q'), KeyModifiers::CONTROL);

    assert!(state.should_quit);
}

#[test]
fn test_profile_picker_keys_need_edit_mode() {
    let mut state = AppState::new();
    state.current_screen = Screen::Profile;

    let ctrl_o = key_event(KeyCode::Char('o'), KeyModifiers::CONTROL);
    assert_eq!(map_key(&state, ctrl_o), None);

    let state = press(state, KeyCode::Char('e'), KeyModifiers::CONTROL);
    assert_eq!(
        map_key(&state, ctrl_o),
        Some(Action::ProfilePickRequested(MediaSource::Library))
    );
    assert_eq!(
        map_key(&state, key_event(KeyCode::Char('t'), KeyModifiers::CONTROL)),
        Some(Action::ProfilePickRequested(MediaSource::Camera))
    );
}

#[test]
fn test_registration_toggles() {
    let state = press(AppState::new(), KeyCode::Char('p'), KeyModifiers::CONTROL);
    assert!(state.registration.form.show_password);

    let state = press(state, KeyCode::Char('n'), KeyModifiers::CONTROL);
    assert!(state.registration.form.night_mode);
}
