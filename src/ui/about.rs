use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::panel;

pub fn render_about(frame: &mut Frame, area: Rect, base_url: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Every About Counts. Every Donor Matters.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Inference service: {base_url}"),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("About")),
        area,
    );
}
