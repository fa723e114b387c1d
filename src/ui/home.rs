//! Landing page.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::router::Route;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::panel;

const FEATURES: [(&str, &str); 3] = [
    (
        "All-in-One AI Toolkit",
        "Work faster with everything in one place: text summarization, image captioning and more.",
    ),
    (
        "Independent, Self-Trained Models",
        "Built on models trained in-house, not third-party APIs.",
    ),
    (
        "Student Demo",
        "A student-driven project showcasing AI capabilities through hands-on development.",
    ),
];

pub fn render_home(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(4),
        ])
        .split(area);

    let title = vec![
        Line::from(""),
        Line::from(Span::styled(
            "AI Toolkit",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), rows[0]);

    let mut tools: Vec<Span> = Vec::new();
    for route in [Route::Summarize, Route::Caption] {
        tools.push(Span::styled(
            format!(" {} [F{}] ", route.title(), route.hotkey()),
            Style::default().fg(HEADER_TEXT).bg(ACCENT),
        ));
        tools.push(Span::raw("  "));
    }
    tools.push(Span::styled(
        "More tools coming soon ...",
        Style::default().fg(MUTED_TEXT),
    ));

    let get_started = vec![
        Line::from(Span::styled(
            "Explore AI-powered tools designed to enhance your productivity. From image \
             analysis to text processing, discover what's possible with modern AI.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(tools),
        Line::from(""),
        Line::from(Span::styled(
            "Press c for captioning, s for summarization, a for about.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(get_started)
            .wrap(Wrap { trim: true })
            .block(panel("Get Started")),
        rows[1],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[2]);
    for ((title, body), card) in FEATURES.iter().zip(cards.iter()) {
        frame.render_widget(
            Paragraph::new(Span::styled(*body, Style::default().fg(MUTED_TEXT)))
                .wrap(Wrap { trim: true })
                .block(panel(title)),
            *card,
        );
    }
}
