//! Terminal UI rendering.

pub mod header;
pub mod lead_view;
pub mod member_view;
pub mod status_bar;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use teamboard_core::clock::Clock;
use teamboard_core::session::Role;

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    // Role tabs on top, status bar at bottom
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app.role());

    match app.role() {
        Role::Lead => lead_view::render(frame, chunks[1], app),
        Role::Member => member_view::render(frame, chunks[1], app),
    }

    status_bar::render(frame, chunks[2], app);
}
