use crate::ui::router::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    route: Route,
    prompt_open: bool,
}

impl Footer {
    pub fn new(route: Route, prompt_open: bool) -> Self {
        Self { route, prompt_open }
    }

    /// Key hints for the current page.
    pub fn hints(&self) -> &'static str {
        match self.route {
            Route::Caption if self.prompt_open => " Enter: Open │ Esc: Cancel │ Ctrl+Q: Quit",
            Route::Caption => {
                " Ctrl+O: Browse │ Ctrl+V: Paste image │ Enter: Generate │ Ctrl+R: Remove │ Esc: Home │ Ctrl+Q: Quit"
            }
            Route::Summarize => {
                " Ctrl+G: Generate │ Ctrl+L: Clear │ Ctrl+V: Paste │ Esc: Home │ Ctrl+Q: Quit"
            }
            Route::Home => " c: Captioning │ s: Summarization │ a: About │ F1-F4: Navigate │ Ctrl+Q: Quit",
            Route::About => " F1-F4: Navigate │ Esc: Home │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
