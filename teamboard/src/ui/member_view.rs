//! Team member dashboard: member picker, status selector, stats and tasks.

use chrono::{Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use teamboard_core::clock::Clock;
use teamboard_core::member::{Member, MemberStatus};
use teamboard_core::task::{MAX_PROGRESS, Task};

use super::theme;
use crate::app::App;

/// Width of the text progress bar in cells.
const BAR_WIDTH: usize = 10;

/// Render the member dashboard for the resolved member.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let Some(member) = app.current_member() else {
        let empty = Paragraph::new(Span::styled("No team members", theme::dimmed()))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    render_member_picker(frame, top[0], member);
    render_status_selector(frame, top[1], member);
    render_stats(frame, chunks[1], member);
    render_tasks(frame, chunks[2], app, member);
}

fn render_member_picker(frame: &mut Frame, area: Rect, member: &Member) {
    let line = Line::from(vec![
        Span::styled("◀ ", theme::dimmed()),
        Span::styled(member.name.as_str(), theme::bold()),
        Span::styled(" ▶", theme::dimmed()),
    ]);
    let block = Block::default()
        .title(Span::styled(
            "Member (←/→)",
            theme::panel_title(theme::MEMBER_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::normal());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_status_selector(frame: &mut Frame, area: Rect, member: &Member) {
    let mut spans = Vec::with_capacity(MemberStatus::ALL.len() * 2);
    for (idx, status) in MemberStatus::ALL.into_iter().enumerate() {
        let label = format!("{} {status}", idx + 1);
        let style = if status == member.status {
            theme::selected().bg(theme::status_color(status))
        } else {
            theme::dimmed()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }
    let block = Block::default()
        .title("Status (1-4)")
        .borders(Borders::ALL)
        .border_style(theme::normal());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_stats(frame: &mut Frame, area: Rect, member: &Member) {
    let counts = member.task_counts();
    let line = Line::from(vec![
        Span::styled("Total ", theme::dimmed()),
        Span::styled(counts.total.to_string(), theme::bold()),
        Span::raw("   "),
        Span::styled("Active ", theme::dimmed()),
        Span::styled(counts.active.to_string(), theme::bold()),
        Span::raw("   "),
        Span::styled("Completed ", theme::dimmed()),
        Span::styled(counts.completed.to_string(), theme::bold()),
    ]);
    let block = Block::default()
        .title("My Tasks")
        .borders(Borders::ALL)
        .border_style(theme::normal());
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_tasks<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>, member: &Member) {
    let today = app.today();

    let block = Block::default()
        .title(Span::styled(
            format!("Tasks for {}", member.name),
            theme::panel_title(theme::MEMBER_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::normal());

    if member.tasks.is_empty() {
        let empty = List::new([ListItem::new(Span::styled(
            "No tasks assigned",
            theme::dimmed(),
        ))]);
        frame.render_widget(empty.block(block), area);
        return;
    }

    let items: Vec<ListItem> = member
        .tasks
        .iter()
        .map(|task| task_item(app, task, today))
        .collect();

    // The list scrolls so the selected task stays inside the viewport.
    let mut state = ListState::default().with_selected(Some(app.task_cursor));
    let list = List::new(items)
        .block(block)
        .highlight_style(theme::highlighted());
    frame.render_stateful_widget(list, area, &mut state);
}

/// Two lines per task: title and status badge, then progress and dates.
fn task_item<'a, C: Clock>(app: &App<C>, task: &'a Task, today: NaiveDate) -> ListItem<'a> {
    let checkbox = if task.completed { "[✓]" } else { "[ ]" };
    let title_style = if task.completed {
        theme::dimmed()
    } else {
        theme::normal()
    };

    let header = Line::from(vec![
        Span::styled(checkbox, title_style),
        Span::raw(" "),
        Span::styled(task.title.as_str(), title_style),
        Span::raw("  "),
        Span::styled(
            task.status.label(),
            theme::normal().fg(theme::task_status_color(task.status)),
        ),
    ]);

    let due_style = if task.is_overdue(today) {
        theme::overdue()
    } else {
        theme::dimmed()
    };
    let mut detail = vec![
        Span::raw("    "),
        Span::raw(progress_bar(task.progress)),
        Span::raw(format!(" {:>3}%", task.progress)),
        Span::raw("  "),
        Span::styled(
            format!("Due {}", task.due_date.format(&app.date_format)),
            due_style,
        ),
    ];
    if let Some(completed_at) = task.completed_at {
        detail.push(Span::styled(
            format!(
                "  Completed {}",
                completed_at
                    .with_timezone(&Local)
                    .format(&app.timestamp_format)
            ),
            theme::dimmed(),
        ));
    }

    ListItem::new(vec![header, Line::from(detail)]).style(theme::normal())
}

/// Fixed-width bar, e.g. `[██████░░░░]` for 60.
fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress.min(MAX_PROGRESS)) * BAR_WIDTH / usize::from(MAX_PROGRESS);
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}
