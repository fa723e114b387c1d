use crate::api::ClientError;
use crate::error::ValidationError;
use crate::intake::SelectedFile;
use crate::preview::PreviewStore;
use crate::request::{Settlement, Submission};
use crate::ui::caption::CaptionPage;
use crate::ui::router::Route;
use crate::ui::summarize::SummarizePage;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum UiCommand {
    /// Send a request; the result comes back as a settlement event.
    Submit(Submission),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// The mounted page. Pages with state own it; dropping the page tears
/// it down (and releases its preview).
pub enum Page {
    Home,
    About,
    Caption(CaptionPage),
    Summarize(SummarizePage),
}

impl Page {
    fn mount(route: Route, previews: &PreviewStore) -> Self {
        match route {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Caption => Page::Caption(CaptionPage::new(previews.clone())),
            Route::Summarize => Page::Summarize(SummarizePage::new()),
        }
    }
}

pub struct App {
    should_quit: bool,
    route: Route,
    page: Page,
    previews: PreviewStore,
    base_url: String,
    command_sender: Option<UiCommandSender>,
    animation_tick: u8,
}

impl App {
    pub fn new(start: Route, previews: PreviewStore, base_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            route: start,
            page: Page::mount(start, &previews),
            previews,
            base_url: base_url.into(),
            command_sender: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn previews(&self) -> &PreviewStore {
        &self.previews
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn caption_mut(&mut self) -> Option<&mut CaptionPage> {
        match &mut self.page {
            Page::Caption(page) => Some(page),
            _ => None,
        }
    }

    pub fn summarize_mut(&mut self) -> Option<&mut SummarizePage> {
        match &mut self.page {
            Page::Summarize(page) => Some(page),
            _ => None,
        }
    }

    /// True while the caption page's browse prompt has focus.
    pub fn prompt_open(&self) -> bool {
        matches!(&self.page, Page::Caption(page) if page.state().is_prompt_open())
    }

    /// Switch pages. The old page is torn down even if it still has a
    /// request in flight; its late settlement is then ignored.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = self.route.path(), to = route.path(), "Navigate");
        self.page = Page::mount(route, &self.previews);
        self.route = route;
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    /// Bracketed paste: a dropped file on the caption page, text on the
    /// summarize page.
    pub fn on_paste(&mut self, text: &str) {
        match &mut self.page {
            Page::Caption(page) => {
                page.on_drop(text);
            }
            Page::Summarize(page) => page.insert_text(text),
            Page::Home | Page::About => {}
        }
    }

    /// Image read from the system clipboard for the caption page.
    pub fn on_clipboard_image(&mut self, image: Result<SelectedFile, ValidationError>) {
        let Some(page) = self.caption_mut() else {
            return;
        };
        if !page.state().accepts_files() {
            return;
        }
        match image {
            Ok(file) => {
                page.select_file(file);
            }
            Err(error) => page.reject(error),
        }
    }

    /// Press Generate on the current page.
    pub fn generate(&mut self) {
        let submission = match &mut self.page {
            Page::Caption(page) => page.generate(),
            Page::Summarize(page) => page.generate(),
            Page::Home | Page::About => None,
        };
        if let Some(submission) = submission {
            self.submit(submission);
        }
    }

    fn submit(&mut self, submission: Submission) {
        let ticket = submission.ticket;
        let result = match &self.command_sender {
            Some(sender) => sender
                .try_send(UiCommand::Submit(submission))
                .map_err(|err| err.to_string()),
            None => Err("no request worker".to_string()),
        };
        if let Err(reason) = result {
            tracing::error!(generation = ticket.generation, "Failed to dispatch request: {reason}");
            self.on_settled(Settlement {
                ticket,
                result: Err(ClientError::Dispatch(reason)),
            });
        }
    }

    /// Route a settled request to the mounted page. Settlements for a
    /// page that is no longer mounted are dropped.
    pub fn on_settled(&mut self, settlement: Settlement) {
        let generation = settlement.ticket.generation;
        let accepted = match &mut self.page {
            Page::Caption(page) => page.settle(settlement),
            Page::Summarize(page) => page.settle(settlement),
            Page::Home | Page::About => false,
        };
        if !accepted {
            tracing::debug!(generation, "Ignored settlement for an unmounted page");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Action, RequestOutcome};
    use serde_json::json;

    fn app(start: Route) -> App {
        App::new(start, PreviewStore::new(), "http://127.0.0.1:8000")
    }

    fn photo() -> SelectedFile {
        SelectedFile::new("photo.png", "image/png", vec![1, 2, 3])
    }

    #[test]
    fn navigating_away_releases_preview() {
        let mut app = app(Route::Caption);
        app.caption_mut().unwrap().select_file(photo());
        assert_eq!(app.previews().live_count(), 1);

        app.navigate(Route::Home);
        assert_eq!(app.previews().live_count(), 0);
    }

    #[test]
    fn navigating_to_same_route_keeps_page() {
        let mut app = app(Route::Caption);
        app.caption_mut().unwrap().select_file(photo());
        app.navigate(Route::Caption);
        assert_eq!(app.previews().live_count(), 1);
    }

    #[test]
    fn generate_sends_submit_command() {
        let mut app = app(Route::Summarize);
        let (tx, mut rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.summarize_mut().unwrap().insert_text("Some text");

        app.generate();

        let command = rx.try_recv().expect("should have received a command");
        let UiCommand::Submit(submission) = command;
        assert_eq!(submission.ticket.action, Action::Summarize);
        assert_eq!(submission.part.file_name, "input.txt");
    }

    #[test]
    fn generate_without_worker_fails_request() {
        let mut app = app(Route::Summarize);
        app.summarize_mut().unwrap().insert_text("Some text");
        app.generate();
        let page = app.summarize_mut().unwrap();
        assert!(!page.state().is_generating());
        assert_eq!(
            page.state().error_message().as_deref(),
            Some("An error occurred while generating the summary.")
        );
    }

    #[test]
    fn settlement_after_remount_is_ignored() {
        let mut app = app(Route::Caption);
        let (tx, mut rx) = mpsc::channel(4);
        app.set_command_sender(tx);
        app.caption_mut().unwrap().select_file(photo());
        app.generate();
        let UiCommand::Submit(submission) = rx.try_recv().unwrap();

        app.navigate(Route::Home);
        app.navigate(Route::Caption);
        app.on_settled(Settlement {
            ticket: submission.ticket,
            result: Ok(json!({"caption": "late"})),
        });

        let page = app.caption_mut().unwrap();
        assert_eq!(page.state().outcome, RequestOutcome::NotStarted);
        assert!(page.state().selected.is_none());
    }

    #[test]
    fn paste_on_summarize_inserts_text() {
        let mut app = app(Route::Summarize);
        app.on_paste("hello");
        assert_eq!(app.summarize_mut().unwrap().state().input, "hello");
    }

    #[test]
    fn clipboard_without_image_shows_error() {
        let mut app = app(Route::Caption);
        app.on_clipboard_image(Err(ValidationError::NoClipboardImage));
        assert_eq!(
            app.caption_mut().unwrap().state().error_message().as_deref(),
            Some("The clipboard does not contain an image.")
        );
    }

    #[test]
    fn tick_wraps() {
        let mut app = app(Route::Home);
        for _ in 0..300 {
            app.on_tick();
        }
        assert_eq!(app.animation_tick(), 44);
    }
}
