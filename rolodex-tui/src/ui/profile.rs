//! Profile screen

use librolodex::forms::ProfileField;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{fg, focused};
use crate::app::AppState;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    render_avatar(frame, chunks[0], state);
    render_details(frame, chunks[1], state);
}

fn render_avatar(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.profile;

    let mut lines = match profile.form.picture {
        Some(ref uri) => vec![
            Line::from(""),
            Line::from(Span::styled("[picture]", fg(state, Color::Green))),
            Line::from(""),
            Line::from(uri.clone()),
        ],
        None => {
            let initial = profile
                .form
                .avatar_initial()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("( {} )", initial),
                    fg(state, Color::Cyan).add_modifier(Modifier::BOLD),
                )),
            ]
        }
    };

    if profile.picking {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Opening picker...", fg(state, Color::Yellow))));
    }

    let avatar = Paragraph::new(lines)
        .block(Block::default().title(" Picture ").borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(avatar, area);
}

fn render_details(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.profile;
    let editing = profile.form.editing;

    let label_style = |field: ProfileField| {
        if editing && profile.focus == field {
            focused(state)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(ProfileField::Name.label(), label_style(ProfileField::Name))),
        Line::from(profile.form.name.clone()),
        Line::from(""),
        Line::from(Span::styled(ProfileField::Bio.label(), label_style(ProfileField::Bio))),
    ];
    lines.extend(profile.form.bio.lines().map(|line| Line::from(line.to_string())));

    let title = if editing { " Profile (editing) " } else { " Profile " };
    let details = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(details, area);
}
