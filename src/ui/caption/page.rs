//! Controller for the caption page.
//!
//! Owns the page state and the one preview slot. Everything with a side
//! effect (reading files, binding previews, issuing tickets) happens here
//! around the pure reducer dispatch.

use std::path::Path;

use crate::api::UploadPart;
use crate::error::ValidationError;
use crate::intake::{self, Intake, SelectedFile};
use crate::preview::{PreviewSlot, PreviewStore};
use crate::request::{reducer, Action, Settlement, Submission, Ticket};
use crate::ui::mvi::Reducer;

use super::intent::CaptionIntent;
use super::reducer::CaptionReducer;
use super::state::CaptionState;

pub struct CaptionPage {
    state: CaptionState,
    preview: PreviewSlot,
}

impl CaptionPage {
    pub fn new(store: PreviewStore) -> Self {
        Self {
            state: CaptionState::default(),
            preview: PreviewSlot::new(store),
        }
    }

    pub fn state(&self) -> &CaptionState {
        &self.state
    }

    pub fn preview_store(&self) -> &PreviewStore {
        self.preview.store()
    }

    fn dispatch(&mut self, intent: CaptionIntent) {
        self.state = CaptionReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Run intake on `file`. Returns true if it was accepted.
    pub fn select_file(&mut self, file: SelectedFile) -> bool {
        if !self.state.accepts_files() {
            tracing::debug!("Ignoring file selection while a caption is generating");
            return false;
        }
        match intake::validate(file) {
            Intake::Accepted(file) => {
                let preview = self.preview.set(&file);
                tracing::info!(
                    name = file.name(),
                    media_type = file.media_type(),
                    size = file.size(),
                    "Image selected"
                );
                self.dispatch(CaptionIntent::FileAccepted { file, preview });
                true
            }
            Intake::Rejected(error) => {
                self.reject(error);
                false
            }
        }
    }

    /// Read `path` from disk and run intake on it.
    pub fn select_path(&mut self, path: &Path) -> bool {
        if !self.state.accepts_files() {
            return false;
        }
        match SelectedFile::from_path(path) {
            Ok(file) => self.select_file(file),
            Err(error) => {
                self.reject(error);
                false
            }
        }
    }

    /// Text pasted while the page is focused: a file dragged onto the
    /// terminal arrives as its path.
    pub fn on_drop(&mut self, text: &str) -> bool {
        if self.state.is_prompt_open() {
            self.dispatch(CaptionIntent::PromptInput {
                text: text.replace(['\r', '\n'], ""),
            });
            return false;
        }
        match intake::normalize_dropped_path(text) {
            Some(path) => self.select_path(&path),
            None => false,
        }
    }

    pub fn reject(&mut self, error: ValidationError) {
        self.dispatch(CaptionIntent::FileRejected { error });
    }

    /// Remove: release the preview and clear selection, caption and error.
    pub fn remove(&mut self) {
        if !self.state.can_remove() {
            return;
        }
        self.preview.clear();
        self.dispatch(CaptionIntent::Remove);
    }

    pub fn open_prompt(&mut self) {
        self.dispatch(CaptionIntent::OpenPrompt);
    }

    pub fn prompt_input(&mut self, ch: char) {
        self.dispatch(CaptionIntent::PromptInput {
            text: ch.to_string(),
        });
    }

    pub fn prompt_backspace(&mut self) {
        self.dispatch(CaptionIntent::PromptBackspace);
    }

    pub fn close_prompt(&mut self) {
        self.dispatch(CaptionIntent::ClosePrompt);
    }

    /// Enter in the browse prompt: select the typed path.
    pub fn submit_prompt(&mut self) -> bool {
        let Some(text) = self.state.prompt.clone() else {
            return false;
        };
        self.dispatch(CaptionIntent::ClosePrompt);
        match intake::normalize_dropped_path(&text) {
            Some(path) => self.select_path(&path),
            None => false,
        }
    }

    /// Generate: returns the request to send, or `None` when the button
    /// is disabled.
    pub fn generate(&mut self) -> Option<Submission> {
        if !self.state.can_generate() {
            return None;
        }
        let file = self.state.selected.as_ref()?;
        let part = UploadPart::from_file(file);
        let ticket = Ticket::issue(Action::Caption);
        self.dispatch(CaptionIntent::Started {
            generation: ticket.generation,
        });
        Some(Submission { ticket, part })
    }

    /// Apply a settled request. Returns false if it was not for this page
    /// instance's current request.
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        let Settlement { ticket, result } = settlement;
        if ticket.action != Action::Caption || !self.state.outcome.awaits(ticket.generation) {
            tracing::debug!(generation = ticket.generation, "Dropping stale caption response");
            return false;
        }
        let outcome = reducer::interpret(Action::Caption, result);
        self.dispatch(CaptionIntent::Settled {
            generation: ticket.generation,
            outcome,
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClientError;
    use crate::request::RequestOutcome;
    use serde_json::json;

    fn photo() -> SelectedFile {
        SelectedFile::new("photo.png", "image/png", vec![1, 2, 3])
    }

    #[test]
    fn selecting_pdf_is_rejected_without_selection() {
        let store = PreviewStore::new();
        let mut page = CaptionPage::new(store.clone());
        let pdf = SelectedFile::new("notes.pdf", "application/pdf", vec![b'%', b'P']);
        assert!(!page.select_file(pdf));
        assert!(page.state().selected.is_none());
        assert_eq!(store.live_count(), 0);
        assert_eq!(
            page.state().error_message().as_deref(),
            Some("Please upload an image file (png, jpg, gif, etc.)")
        );
    }

    #[test]
    fn one_live_preview_per_page() {
        let store = PreviewStore::new();
        let mut page = CaptionPage::new(store.clone());
        page.select_file(photo());
        let first = page.state().preview.unwrap();
        page.select_file(SelectedFile::new("b.jpg", "image/jpeg", vec![9]));
        assert_eq!(store.live_count(), 1);
        assert!(store.resolve(first).is_none());
    }

    #[test]
    fn remove_releases_preview_and_clears_state() {
        let store = PreviewStore::new();
        let mut page = CaptionPage::new(store.clone());
        page.select_file(photo());
        page.remove();
        assert_eq!(store.live_count(), 0);
        assert_eq!(page.state(), &CaptionState::default());
    }

    #[test]
    fn teardown_releases_preview() {
        let store = PreviewStore::new();
        let mut page = CaptionPage::new(store.clone());
        page.select_file(photo());
        drop(page);
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn generate_without_file_is_disabled() {
        let mut page = CaptionPage::new(PreviewStore::new());
        assert!(page.generate().is_none());
    }

    #[test]
    fn single_flight() {
        let mut page = CaptionPage::new(PreviewStore::new());
        page.select_file(photo());
        let submission = page.generate().unwrap();
        assert_eq!(submission.part.file_name, "photo.png");
        assert!(page.generate().is_none());
        assert!(page.state().is_generating());
    }

    #[test]
    fn settle_success_and_stale() {
        let mut page = CaptionPage::new(PreviewStore::new());
        page.select_file(photo());
        let submission = page.generate().unwrap();

        let stale = Settlement {
            ticket: Ticket::issue(Action::Caption),
            result: Ok(json!({"caption": "wrong"})),
        };
        assert!(!page.settle(stale));

        let accepted = page.settle(Settlement {
            ticket: submission.ticket,
            result: Ok(json!({"caption": "A dog running on grass"})),
        });
        assert!(accepted);
        assert_eq!(page.state().caption(), Some("A dog running on grass"));
        assert!(page.state().can_generate());
    }

    #[test]
    fn settle_failure_shows_generic_message() {
        let mut page = CaptionPage::new(PreviewStore::new());
        page.select_file(photo());
        let submission = page.generate().unwrap();
        page.settle(Settlement {
            ticket: submission.ticket,
            result: Err(ClientError::Status { status: 503 }),
        });
        assert_eq!(
            page.state().error_message().as_deref(),
            Some("An error occurred while generating the caption.")
        );
        assert!(matches!(page.state().outcome, RequestOutcome::Failed { .. }));
    }

    #[test]
    fn unreadable_prompt_path_keeps_selection() {
        let mut page = CaptionPage::new(PreviewStore::new());
        page.select_file(photo());
        page.open_prompt();
        for ch in "/no/such/file.png".chars() {
            page.prompt_input(ch);
        }
        assert!(!page.submit_prompt());
        assert!(!page.state().is_prompt_open());
        assert_eq!(page.state().selected.as_ref().map(|f| f.name()), Some("photo.png"));
        assert_eq!(
            page.state().error_message().as_deref(),
            Some("Could not read 'file.png'.")
        );
    }
}
