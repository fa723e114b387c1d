use crate::ui::about::render_about;
use crate::ui::app::{App, Page};
use crate::ui::caption::render_caption_page;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::home::render_home;
use crate::ui::layout::{layout_regions, page_rect};
use crate::ui::summarize::render_summarize_page;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route()).widget(), header);
    frame.render_widget(Clear, body);

    let content = page_rect(body);
    match app.page() {
        Page::Home => render_home(frame, content),
        Page::About => render_about(frame, content, app.base_url()),
        Page::Caption(page) => render_caption_page(
            frame,
            content,
            page.state(),
            page.preview_store(),
            app.animation_tick(),
        ),
        Page::Summarize(page) => {
            render_summarize_page(frame, content, page.state(), app.animation_tick())
        }
    }

    let footer_widget = Footer::new(app.route(), app.prompt_open());
    frame.render_widget(footer_widget.widget(footer), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewStore;
    use crate::ui::router::Route;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn every_route_renders_with_nav_bar() {
        for route in Route::ALL {
            let app = App::new(route, PreviewStore::new(), "http://127.0.0.1:8000");
            let text = screen(&app);
            assert!(text.contains("AI Toolkit"), "{route:?}");
            assert!(text.contains("Text Summarization"), "{route:?}");
            assert!(text.contains("Ctrl+Q: Quit"), "{route:?}");
        }
    }

    #[test]
    fn about_shows_service_url() {
        let app = App::new(Route::About, PreviewStore::new(), "http://inference.local:9000");
        assert!(screen(&app).contains("http://inference.local:9000"));
    }
}
