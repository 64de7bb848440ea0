//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Each screen has its own module; this one draws the frame around them
//! (tabs, status bar) and the overlays.

mod contacts;
mod profile;
mod registration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{AppState, Screen};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(5),    // Screen
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_tabs(frame, chunks[0], state);

    match state.current_screen {
        Screen::Registration => registration::render(frame, chunks[1], state),
        Screen::Contacts => contacts::render(frame, chunks[1], state),
        Screen::Profile => profile::render(frame, chunks[1], state),
    }

    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error, state);
    }
}

/// Style helper that drops colors when they are disabled
pub(crate) fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Style for the input that has the cursor
pub(crate) fn focused(state: &AppState) -> Style {
    fg(state, Color::Yellow).add_modifier(Modifier::BOLD)
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| Line::from(format!("F{} {}", i + 2, screen.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Rolodex "))
        .select(state.current_screen.index())
        .highlight_style(focused(state));

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.current_screen {
        Screen::Registration => "Enter: Register | Ctrl+P: Show password | Ctrl+N: Night mode",
        Screen::Contacts => "Enter: Add contact | Up/Down: Move | Tab: Field",
        Screen::Profile if state.profile.form.editing => {
            "Ctrl+O: Library | Ctrl+T: Camera | Ctrl+S: Save | Ctrl+E: Cancel"
        }
        Screen::Profile => "Ctrl+E: Edit profile",
    };

    let mut spans = Vec::new();
    if let Some(ref message) = state.status.message {
        spans.push(Span::styled(message.clone(), fg(state, Color::Green)));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(hints, fg(state, Color::Gray)));
    spans.push(Span::raw(" | F1: Help | Ctrl+Q: Quit"));

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+Q   - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  F2/F3/F4 - Register / Contacts / Profile"),
        Line::from("  Esc      - Dismiss overlays"),
        Line::from(""),
        Line::from("Register:"),
        Line::from("  Enter    - Submit"),
        Line::from("  Ctrl+P   - Show/hide password"),
        Line::from("  Ctrl+N   - Night mode"),
        Line::from(""),
        Line::from("Contacts:"),
        Line::from("  Up/Down  - Move between rows"),
        Line::from("  Tab      - Switch field"),
        Line::from("  Enter    - Add contact (new contact inputs)"),
        Line::from(""),
        Line::from("Profile:"),
        Line::from("  Ctrl+E   - Edit / cancel"),
        Line::from("  Ctrl+O   - Picture from library"),
        Line::from("  Ctrl+T   - Take picture"),
        Line::from("  Ctrl+S   - Save"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str, state: &AppState) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled(
            "Error",
            fg(state, Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
