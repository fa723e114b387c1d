use crate::ui::router::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation bar: app name followed by every route, the active one
/// highlighted.
pub struct Header {
    active: Route,
}

impl Header {
    pub fn new(active: Route) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("AI Toolkit", text_style.add_modifier(Modifier::BOLD)),
        ];
        for route in Route::ALL {
            spans.push(Span::styled("  │  ", separator_style));
            let style = if route == self.active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            spans.push(Span::styled(
                format!(" F{} {} ", route.hotkey(), route.title()),
                style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
