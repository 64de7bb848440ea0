//! Contacts screen: one editable row per roster record plus the new-contact
//! inputs

use librolodex::ContactField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{fg, focused};
use crate::app::{AppState, ContactsFocus, LoadState};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(area);

    render_rows(frame, chunks[0], state);
    render_new_contact(frame, chunks[1], state);
}

fn cell(state: &AppState, value: &str, is_focused: bool, width: usize) -> Span<'static> {
    let text = format!("{:<width$}", value, width = width);
    if is_focused {
        Span::styled(text, focused(state))
    } else {
        Span::raw(text)
    }
}

/// First line to draw so that row `focus` sits inside `visible` lines
fn scroll_offset(focus: usize, visible: u16) -> u16 {
    let visible = usize::from(visible.max(1));
    let offset = (focus + 1).saturating_sub(visible);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn render_rows(frame: &mut Frame, area: Rect, state: &AppState) {
    let contacts = &state.contacts;

    // Hand-added records are listed whatever the load state is
    let mut lines: Vec<Line> = Vec::new();
    if contacts.roster.is_empty() {
        lines.push(match contacts.load {
            LoadState::Pending => Line::from(Span::styled(
                "Loading contacts...",
                fg(state, Color::Yellow),
            )),
            LoadState::Denied => Line::from(Span::styled(
                "Contacts permission not granted",
                fg(state, Color::Yellow),
            )),
            LoadState::Failed(ref error) => Line::from(Span::styled(
                format!("Could not load contacts: {}", error),
                fg(state, Color::Red),
            )),
            LoadState::Loaded => Line::from("No contacts on this device"),
        });
    }

    for (index, record) in contacts.roster.records().iter().enumerate() {
        let focus_field = match contacts.focus {
            ContactsFocus::Row { index: i, field } if i == index => Some(field),
            _ => None,
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>4} ", record.id), fg(state, Color::DarkGray)),
            cell(
                state,
                &record.name,
                focus_field == Some(ContactField::Name),
                24,
            ),
            Span::raw(" "),
            cell(
                state,
                &record.phone_number,
                focus_field == Some(ContactField::PhoneNumber),
                16,
            ),
        ]));
    }

    let offset = match contacts.focus {
        ContactsFocus::Row { index, .. } => scroll_offset(index, area.height.saturating_sub(2)),
        _ => 0,
    };

    let title = format!(" Contacts ({}) ", contacts.roster.len());
    let list = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .scroll((offset, 0));

    frame.render_widget(list, area);
}

fn render_new_contact(frame: &mut Frame, area: Rect, state: &AppState) {
    let contacts = &state.contacts;

    let lines = vec![
        Line::from(vec![
            Span::raw("Name:  "),
            cell(
                state,
                &contacts.new_name,
                contacts.focus == ContactsFocus::NewName,
                24,
            ),
        ]),
        Line::from(vec![
            Span::raw("Phone: "),
            cell(
                state,
                &contacts.new_phone,
                contacts.focus == ContactsFocus::NewPhone,
                16,
            ),
        ]),
    ];

    let inputs = Paragraph::new(lines).block(
        Block::default()
            .title(" New contact (Enter to add) ")
            .borders(Borders::ALL),
    );

    frame.render_widget(inputs, area);
}
