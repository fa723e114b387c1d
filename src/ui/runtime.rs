use crate::api::InferenceClient;
use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::preview::PreviewStore;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::router::Route;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{spawn_request_worker, COMMAND_QUEUE};
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Run the UI until the user quits. Requests run on `handle`.
pub fn run(config: &Config, client: InferenceClient, handle: &Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let start = Route::from_path(&config.ui.start_page).unwrap_or(Route::Home);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(start, PreviewStore::new(), client.base_url());
    let (command_tx, command_rx) = mpsc::channel::<UiCommand>(COMMAND_QUEUE);
    app.set_command_sender(command_tx);
    let worker = spawn_request_worker(handle, client, command_rx, events.sender());

    // Opened on first use; not every environment has a clipboard.
    let mut clipboard: Option<ClipboardHandler> = None;

    tracing::info!(route = start.path(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::ClipboardPaste {
                    paste_from_clipboard(&mut app, &mut clipboard);
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Settled(settlement)) => app.on_settled(settlement),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app tears down the mounted page and closes the command
    // channel, which stops the worker.
    drop(app);
    worker.abort();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

fn paste_from_clipboard(app: &mut App, clipboard: &mut Option<ClipboardHandler>) {
    if clipboard.is_none() {
        match ClipboardHandler::new() {
            Ok(handler) => *clipboard = Some(handler),
            Err(err) => tracing::warn!("Clipboard unavailable: {err}"),
        }
    }

    match (app.route(), clipboard.as_mut()) {
        (Route::Caption, Some(handler)) => app.on_clipboard_image(handler.get_image()),
        (Route::Caption, None) => {
            app.on_clipboard_image(Err(crate::error::ValidationError::NoClipboardImage))
        }
        (Route::Summarize, Some(handler)) => {
            if let Some(text) = handler.get_text() {
                app.on_paste(&text);
            }
        }
        _ => {}
    }
}
