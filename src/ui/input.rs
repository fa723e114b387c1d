use crate::ui::app::App;
use crate::ui::router::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Read the system clipboard: an image on the caption page, text on
    /// the summarize page.
    ClipboardPaste,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return InputAction::None;
    }

    if let KeyCode::F(n) = key.code {
        if let Some(route) = Route::from_hotkey(n) {
            app.navigate(route);
        }
        return InputAction::None;
    }

    // Ctrl+V or Ctrl+Shift+V: the terminal cannot paste images as text,
    // so the clipboard is read directly.
    if (is_ctrl_char(key, 'v') || is_ctrl_shift_char(key, 'v'))
        && matches!(app.route(), Route::Caption | Route::Summarize)
        && !app.prompt_open()
    {
        return InputAction::ClipboardPaste;
    }

    match app.route() {
        Route::Home => handle_home_key(app, key),
        Route::About => {
            if key.code == KeyCode::Esc {
                app.navigate(Route::Home);
            }
        }
        Route::Caption => handle_caption_key(app, key),
        Route::Summarize => handle_summarize_key(app, key),
    }
    InputAction::None
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    if has_command_modifier(key) {
        return;
    }
    let route = match key.code {
        KeyCode::Char('c') => Route::Caption,
        KeyCode::Char('s') => Route::Summarize,
        KeyCode::Char('a') => Route::About,
        _ => return,
    };
    app.navigate(route);
}

fn handle_caption_key(app: &mut App, key: KeyEvent) {
    if app.prompt_open() {
        let Some(page) = app.caption_mut() else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                page.submit_prompt();
            }
            KeyCode::Esc => page.close_prompt(),
            KeyCode::Backspace => page.prompt_backspace(),
            KeyCode::Char(ch) if !has_command_modifier(key) => page.prompt_input(ch),
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::Esc {
        app.navigate(Route::Home);
        return;
    }
    if key.code == KeyCode::Enter || is_ctrl_char(key, 'g') {
        app.generate();
        return;
    }

    let Some(page) = app.caption_mut() else {
        return;
    };
    if is_ctrl_char(key, 'o') {
        page.open_prompt();
    } else if is_ctrl_char(key, 'r') || key.code == KeyCode::Delete {
        page.remove();
    }
}

fn handle_summarize_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.navigate(Route::Home);
        return;
    }
    if is_ctrl_char(key, 'g') {
        app.generate();
        return;
    }

    let Some(page) = app.summarize_mut() else {
        return;
    };
    if is_ctrl_char(key, 'l') {
        page.clear();
        return;
    }
    match key.code {
        KeyCode::Enter => page.insert_char('\n'),
        KeyCode::Backspace => page.backspace(),
        KeyCode::Char(ch) if !has_command_modifier(key) => page.insert_char(ch),
        _ => {}
    }
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_ctrl_shift_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.modifiers.contains(KeyModifiers::SHIFT)
}
