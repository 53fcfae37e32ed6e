//! Role tabs across the top of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Tabs},
};

use teamboard_core::session::Role;

use super::theme;

const TITLES: [&str; 2] = ["Team Lead", "Team Member"];

/// Render the role switcher with the active role highlighted.
pub fn render(frame: &mut Frame, area: Rect, role: Role) {
    let selected = match role {
        Role::Lead => 0,
        Role::Member => 1,
    };

    let tabs = Tabs::new(TITLES)
        .select(selected)
        .style(theme::dimmed())
        .highlight_style(theme::highlighted())
        .block(
            Block::default()
                .title("Team Status Dashboard")
                .title_style(theme::bold())
                .borders(Borders::ALL)
                .border_style(theme::normal()),
        );

    frame.render_widget(tabs, area);
}
