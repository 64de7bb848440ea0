//! Registration screen

use librolodex::forms::RegistrationField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{fg, focused};
use crate::app::AppState;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.registration.form;

    // Night mode inverts the palette of the whole form
    let base = if !state.config.colors_enabled {
        Style::default()
    } else if form.night_mode {
        Style::default().fg(Color::White).bg(Color::Black)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Create Account",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for field in RegistrationField::ALL {
        let is_focused = field == state.registration.focus;
        let marker = if is_focused { "> " } else { "  " };
        let label_style = if is_focused {
            focused(state)
        } else {
            Style::default()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<18}", marker, field.label()), label_style),
            Span::raw(form.display_value(field)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "[{}] Show password    [{}] Night mode",
        if form.show_password { "x" } else { " " },
        if form.night_mode { "x" } else { " " },
    )));

    if let Some(ref message) = form.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            fg(state, Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .style(base)
        .block(Block::default().title(" Register ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
