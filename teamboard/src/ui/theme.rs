//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

use teamboard_core::member::MemberStatus;
use teamboard_core::task::TaskStatus;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Working indicator color.
pub const STATUS_WORKING: Color = Color::Green;

/// Break indicator color.
pub const STATUS_BREAK: Color = Color::Yellow;

/// Meeting indicator color.
pub const STATUS_MEETING: Color = Color::Blue;

/// Offline indicator color.
pub const STATUS_OFFLINE: Color = Color::DarkGray;

/// Overdue due dates.
pub const OVERDUE: Color = Color::Red;

/// Panel title color for the lead dashboard.
pub const LEAD_TITLE: Color = Color::Cyan;

/// Panel title color for the member dashboard.
pub const MEMBER_TITLE: Color = Color::Green;

/// Indicator color for a member status.
#[must_use]
pub const fn status_color(status: MemberStatus) -> Color {
    match status {
        MemberStatus::Working => STATUS_WORKING,
        MemberStatus::Break => STATUS_BREAK,
        MemberStatus::Meeting => STATUS_MEETING,
        MemberStatus::Offline => STATUS_OFFLINE,
    }
}

/// Badge color for a task status.
#[must_use]
pub const fn task_status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Pending => Color::Gray,
        TaskStatus::InProgress => Color::Yellow,
        TaskStatus::Completed => Color::Green,
    }
}

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (metadata, completed tasks).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (active tab, form border).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for an overdue due date.
#[must_use]
pub fn overdue() -> Style {
    Style::default().fg(OVERDUE).add_modifier(Modifier::BOLD)
}

/// Style for the input cursor (bright white, bold).
#[must_use]
pub fn input_cursor() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
