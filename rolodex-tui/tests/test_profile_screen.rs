//! Profile screen flow through the reducer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use librolodex::forms::{ProfileField, ProfileForm};
use librolodex::service::events::MediaSource;
use librolodex::service::profile::LIBRARY_PERMISSION_NOTICE;
use librolodex::types::PickResult;
use rolodex_tui::app::reducer::CAMERA_PERMISSION_NOTICE;
use rolodex_tui::app::{reduce, Action, AppState, Screen};

fn profile_screen() -> AppState {
    let mut state = AppState::with_profile(ProfileForm::new("Ada", "Engines"));
    state.current_screen = Screen::Profile;
    state
}

fn ctrl(state: AppState, c: char) -> AppState {
    reduce(
        state,
        Action::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
    )
}

fn editing() -> AppState {
    ctrl(profile_screen(), 'e')
}

#[test]
fn test_typing_ignored_outside_edit_mode() {
    let state = reduce(
        profile_screen(),
        Action::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
    );

    assert_eq!(state.profile.form.name, "Ada");
}

#[test]
fn test_edit_and_save() {
    let state = editing();
    assert!(state.profile.form.editing);

    let state = reduce(
        state,
        Action::Key(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE)),
    );
    let state = ctrl(state, 's');

    assert!(!state.profile.form.editing);
    assert_eq!(state.profile.form.name, "Ada!");
    assert_eq!(state.status.message.as_deref(), Some("Profile saved"));
}

#[test]
fn test_enter_in_bio_adds_newline() {
    let state = editing();
    let state = reduce(state, Action::ProfileFocus(ProfileField::Bio));
    let state = reduce(
        state,
        Action::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
    );

    assert_eq!(state.profile.form.bio, "Engines\n");
}

#[test]
fn test_pick_request_marks_picking_once() {
    let state = reduce(editing(), Action::ProfilePickRequested(MediaSource::Library));
    assert!(state.profile.picking);
    assert!(!state.can_pick());

    // A second request while the picker is open changes nothing
    let again = reduce(state.clone(), Action::ProfilePickRequested(MediaSource::Camera));
    assert!(again.profile.picking);
}

#[test]
fn test_pick_request_ignored_outside_edit_mode() {
    let state = reduce(profile_screen(), Action::ProfilePickRequested(MediaSource::Library));

    assert!(!state.profile.picking);
}

#[test]
fn test_picked_picture_is_applied() {
    let state = reduce(editing(), Action::ProfilePickRequested(MediaSource::Library));
    let state = reduce(
        state,
        Action::ProfilePictureResult(PickResult::Picked {
            uri: "/pics/ada.png".to_string(),
        }),
    );

    assert!(!state.profile.picking);
    assert_eq!(state.profile.form.picture.as_deref(), Some("/pics/ada.png"));
    assert_eq!(state.status.message.as_deref(), Some("Profile picture updated"));
}

#[test]
fn test_cancelled_pick_keeps_picture() {
    let mut state = editing();
    state.profile.form.picture = Some("/pics/old.png".to_string());

    let state = reduce(state, Action::ProfilePickRequested(MediaSource::Camera));
    let state = reduce(state, Action::ProfilePictureResult(PickResult::Cancelled));

    assert!(!state.profile.picking);
    assert_eq!(state.profile.form.picture.as_deref(), Some("/pics/old.png"));
}

#[test]
fn test_permission_notices() {
    let library = reduce(
        profile_screen(),
        Action::ProfilePermissionDenied(MediaSource::Library),
    );
    assert_eq!(library.error.as_deref(), Some(LIBRARY_PERMISSION_NOTICE));

    let camera = reduce(
        editing(),
        Action::ProfilePermissionDenied(MediaSource::Camera),
    );
    assert_eq!(camera.error.as_deref(), Some(CAMERA_PERMISSION_NOTICE));
    assert!(!camera.profile.picking);
}

#[test]
fn test_cancel_editing_keeps_typed_values() {
    let state = editing();
    let state = reduce(
        state,
        Action::Key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
    );
    let state = ctrl(state, 'e');

    assert!(!state.profile.form.editing);
    assert_eq!(state.profile.form.name, "Ad");
}

#[test]
fn test_library_permission_requested_on_first_visit_only() {
    let state = AppState::new();
    assert!(!state.profile.permission_requested);

    let f4 = KeyEvent::new(KeyCode::F(4), KeyModifiers::NONE);
    let action = rolodex_tui::app::map_key(&state, f4).unwrap();
    assert!(state.requests_library_permission(&action));

    let state = reduce(state, action);
    assert_eq!(state.current_screen, Screen::Profile);

    let state = reduce(state, Action::NavigateTo(Screen::Contacts));
    let action = rolodex_tui::app::map_key(&state, f4).unwrap();
    assert!(!state.requests_library_permission(&action));
}
