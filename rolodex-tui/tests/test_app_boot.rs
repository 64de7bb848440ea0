//! Test application initialization and boot sequence
//!
//! Verifies that the app initializes with correct defaults
//! based on environment variables.

use librolodex::forms::ProfileForm;
use rolodex_tui::app::{AppState, ContactsFocus, LoadState, Screen};
use serial_test::serial;

#[test]
fn test_app_initializes_to_registration_screen() {
    let state = AppState::new();

    assert_eq!(state.current_screen, Screen::Registration);
    assert!(!state.should_quit);
}

#[test]
fn test_help_hidden_by_default() {
    let state = AppState::new();

    assert!(!state.help_visible);
}

#[test]
fn test_no_error_on_boot() {
    let state = AppState::new();

    assert!(state.error.is_none());
    assert!(state.status.message.is_none());
}

#[test]
fn test_contacts_pending_and_empty_on_boot() {
    let state = AppState::new();

    assert_eq!(state.contacts.load, LoadState::Pending);
    assert!(state.contacts.roster.is_empty());
    assert_eq!(state.contacts.focus, ContactsFocus::NewName);
}

#[test]
fn test_registration_starts_blank() {
    let state = AppState::new();
    let form = &state.registration.form;

    assert!(form.validate().is_err());
    assert!(!form.show_password);
    assert!(!form.night_mode);
    assert!(form.error_message.is_none());
}

#[test]
fn test_profile_from_config() {
    let state = AppState::with_profile(ProfileForm::new("Grace Hopper", "COBOL"));

    assert_eq!(state.profile.form.name, "Grace Hopper");
    assert!(!state.profile.form.editing);
    assert!(!state.profile.picking);
    assert_eq!(state.current_screen, Screen::Registration);
}

#[test]
#[serial]
fn test_colors_disabled_with_no_color_env() {
    std::env::set_var("NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_colors_disabled_with_rolodex_tui_no_color_env() {
    std::env::set_var("ROLODEX_TUI_NO_COLOR", "1");
    let state = AppState::new();
    std::env::remove_var("ROLODEX_TUI_NO_COLOR");

    assert!(!state.config.colors_enabled);
}

#[test]
#[serial]
fn test_tick_rate_from_env() {
    std::env::set_var("ROLODEX_TUI_TICK_MS", "250");
    let state = AppState::new();
    std::env::remove_var("ROLODEX_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 250);
}

#[test]
#[serial]
fn test_invalid_tick_rate_falls_back_to_default() {
    std::env::set_var("ROLODEX_TUI_TICK_MS", "soon");
    let state = AppState::new();
    std::env::remove_var("ROLODEX_TUI_TICK_MS");

    assert_eq!(state.config.tick_rate_ms, 100);
}
