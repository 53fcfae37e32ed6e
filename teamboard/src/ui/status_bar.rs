//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use teamboard_core::clock::Clock;
use teamboard_core::session::Role;

use super::theme;
use crate::app::{App, InputMode};

/// Render the status bar at the bottom of the screen.
pub fn render<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let help_text = match (app.input_mode, app.role()) {
        (InputMode::AssignTitle | InputMode::AssignDueDate, _) => {
            "Type to edit | Enter: next | Backspace: delete | Esc: cancel"
        }
        (InputMode::Normal, Role::Lead) => {
            "↑↓/jk: navigate | Enter: open | a: assign | f: filter | s: sort | r: role | q: quit"
        }
        (InputMode::Normal, Role::Member) => {
            "←→: member | 1-4: status | ↑↓: task | +/-: progress | p/i/c: task status | r: role | q: quit"
        }
    };

    let mut spans = vec![
        Span::styled(
            concat!("Teamboard v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
    ];
    if let Some(notice) = &app.notice {
        spans.push(Span::styled(
            notice.as_str(),
            theme::normal().fg(theme::STATUS_BREAK),
        ));
        spans.push(Span::raw(" | "));
    }
    spans.push(Span::styled(help_text, theme::dimmed()));

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
