//! rolodex-tui - Terminal UI for Rolodex
//!
//! Interactive registration, contacts and profile screens on top of
//! librolodex.

use librolodex::config::resolve_data_path;
use librolodex::forms::ProfileForm;
use librolodex::logging;
use rolodex_tui::{
    app::{
        event::{service_action, EventHandler, TuiEvent},
        map_key, reduce, Action, AppState,
    },
    error::Result,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

fn main() -> Result<()> {
    init_logging();

    // Built before the terminal is taken over so config errors print normally
    let services = ServiceHandle::new()?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &services);

    restore_terminal(terminal)?;

    result
}

/// Log to `<data dir>/rolodex-tui.log` when `ROLODEX_TUI_LOG` is set
///
/// The variable's value is the level filter; an empty value means info.
fn init_logging() {
    let Ok(level) = std::env::var("ROLODEX_TUI_LOG") else {
        return;
    };
    let level = if level.is_empty() { "info".to_string() } else { level };

    let path = match resolve_data_path() {
        Ok(dir) => dir.join("rolodex-tui.log"),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            return;
        }
    };

    if let Err(e) = logging::init_file(&path, &level) {
        eprintln!("Warning: could not open log file {}: {}", path.display(), e);
    }
}

fn run_app(terminal: &mut Tui, services: &ServiceHandle) -> Result<()> {
    let mut state = AppState::with_profile(ProfileForm::from_config(&services.config().profile));

    services.spawn_load_contacts();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        // Keys are resolved here rather than in the reducer so side effects
        // see the mapped action
        let action = match event_handler.next()? {
            TuiEvent::Key(key) => map_key(&state, key),
            other => Some(Action::from(other)),
        };

        if let Some(action) = action {
            if state.requests_library_permission(&action) {
                services.spawn_library_permission();
            }
            if let Action::ProfilePickRequested(source) = action {
                if state.can_pick() {
                    services.spawn_pick(source);
                }
            }
            state = reduce(state, action);
        }

        while let Ok(event) = services.events().try_recv() {
            tracing::debug!(?event, "Service event");
            state = reduce(state, service_action(event));
        }

        if state.should_quit {
            tracing::info!("Exiting");
            break;
        }
    }

    Ok(())
}
