//! Team lead dashboard: status cards, member list and the assign form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use teamboard_core::clock::Clock;
use teamboard_core::member::MemberStatus;
use teamboard_core::summary::status_counts;

use super::theme;
use crate::app::{App, InputMode};

/// Render the lead dashboard.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let form_height = if app.input_mode == InputMode::Normal {
        0
    } else {
        5
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(form_height),
            Constraint::Min(3),
        ])
        .split(area);

    render_status_cards(frame, chunks[0], app);
    if app.input_mode != InputMode::Normal {
        render_assign_form(frame, chunks[1], app);
    }
    render_member_list(frame, chunks[2], app);
}

/// One card per availability status with the member count.
fn render_status_cards<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let counts = status_counts(app.store().roster().members());
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (status, card) in MemberStatus::ALL.into_iter().zip(cards.iter()) {
        let color = theme::status_color(status);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            counts.get(status).to_string(),
            theme::panel_title(color),
        )))
        .block(
            Block::default()
                .title(status.to_string())
                .borders(Borders::ALL)
                .border_style(theme::normal().fg(color)),
        );
        frame.render_widget(paragraph, *card);
    }
}

/// The two-step task assignment form.
fn render_assign_form<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let target = app.assign_target_name().unwrap_or("?");
    let (label, hint) = match app.input_mode {
        InputMode::AssignDueDate => ("Due date: ", "YYYY-MM-DD, Enter to assign, Esc to cancel"),
        _ => ("Title: ", "Enter to continue, Esc to cancel"),
    };

    let mut lines = Vec::with_capacity(3);
    if app.input_mode == InputMode::AssignDueDate {
        lines.push(Line::from(vec![
            Span::styled("Title: ", theme::dimmed()),
            Span::raw(app.draft_title()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(label, theme::bold()),
        Span::raw(app.input.as_str()),
        Span::styled("█", theme::input_cursor()),
    ]));
    lines.push(Line::from(Span::styled(hint, theme::dimmed())));

    let block = Block::default()
        .title(format!("Assign Task to {target}"))
        .borders(Borders::ALL)
        .border_style(theme::highlighted());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Filtered and sorted members with their task counts.
fn render_member_list<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let items: Vec<ListItem> = app
        .visible_members()
        .into_iter()
        .map(|member| {
            let counts = member.task_counts();
            ListItem::new(Line::from(vec![
                Span::styled("● ", theme::normal().fg(theme::status_color(member.status))),
                Span::styled(format!("{:<20}", member.name), theme::bold()),
                Span::styled(format!("{:<9}", member.status.to_string()), theme::dimmed()),
                Span::raw(format!(
                    "  {} active · {} completed",
                    counts.active, counts.completed
                )),
            ]))
            .style(theme::normal())
        })
        .collect();

    let title = format!("Team Members ({} | {})", app.filter, app.sort);
    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(theme::LEAD_TITLE)))
        .borders(Borders::ALL)
        .border_style(theme::normal());

    if items.is_empty() {
        let empty = List::new([ListItem::new(Span::styled(
            "No members match this filter",
            theme::dimmed(),
        ))]);
        frame.render_widget(empty.block(block), area);
        return;
    }

    let mut state = ListState::default().with_selected(Some(app.member_cursor));
    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected());
    frame.render_stateful_widget(list, area, &mut state);
}
