//! Small building blocks shared by the page views.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK};

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

/// A `[ label ]` button. Disabled buttons are dimmed.
pub fn button(label: &str, hint: &str, enabled: bool, primary: bool) -> Vec<Span<'static>> {
    let style = match (enabled, primary) {
        (false, _) => Style::default()
            .fg(MUTED_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::DIM),
        (true, true) => Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT),
    };
    vec![
        Span::styled(format!(" {label} "), style),
        Span::styled(format!(" {hint}"), Style::default().fg(MUTED_TEXT)),
    ]
}

/// Button label while a request runs: spinner plus text.
pub fn busy_button(label: &str, animation_tick: u8) -> Vec<Span<'static>> {
    vec![Span::styled(
        format!(" {} {label} ", spinner(animation_tick)),
        Style::default()
            .fg(STATUS_OK)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    )]
}

pub fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

pub fn placeholder(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(MUTED_TEXT)
            .add_modifier(Modifier::ITALIC),
    ))
}
