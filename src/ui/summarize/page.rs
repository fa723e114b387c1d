//! Controller for the summarize page.

use crate::api::UploadPart;
use crate::error::ValidationError;
use crate::request::{reducer, Action, Settlement, Submission, Ticket};
use crate::ui::mvi::Reducer;

use super::intent::SummarizeIntent;
use super::reducer::SummarizeReducer;
use super::state::SummarizeState;

#[derive(Default)]
pub struct SummarizePage {
    state: SummarizeState,
}

impl SummarizePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SummarizeState {
        &self.state
    }

    fn dispatch(&mut self, intent: SummarizeIntent) {
        self.state = SummarizeReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    pub fn insert_char(&mut self, ch: char) {
        self.dispatch(SummarizeIntent::Insert {
            text: ch.to_string(),
        });
    }

    /// Pasted text. Line endings are normalised to `\n`.
    pub fn insert_text(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.dispatch(SummarizeIntent::Insert { text });
    }

    pub fn backspace(&mut self) {
        self.dispatch(SummarizeIntent::Backspace);
    }

    pub fn clear(&mut self) {
        self.dispatch(SummarizeIntent::Clear);
    }

    /// Generate: blank input fails locally without a request.
    pub fn generate(&mut self) -> Option<Submission> {
        if !self.state.can_generate() {
            return None;
        }
        if self.state.input.trim().is_empty() {
            self.dispatch(SummarizeIntent::Rejected {
                error: ValidationError::EmptyText,
            });
            return None;
        }
        // The untrimmed input is sent; only the emptiness check trims.
        let part = UploadPart::from_text(&self.state.input);
        let ticket = Ticket::issue(Action::Summarize);
        tracing::info!(
            generation = ticket.generation,
            chars = self.state.char_count(),
            "Summary requested"
        );
        self.dispatch(SummarizeIntent::Started {
            generation: ticket.generation,
        });
        Some(Submission { ticket, part })
    }

    /// Apply a settled request. Returns false if it was not for this page
    /// instance's current request.
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        let Settlement { ticket, result } = settlement;
        if ticket.action != Action::Summarize || !self.state.outcome.awaits(ticket.generation) {
            tracing::debug!(generation = ticket.generation, "Dropping stale summary response");
            return false;
        }
        let outcome = reducer::interpret(Action::Summarize, result);
        self.dispatch(SummarizeIntent::Settled {
            generation: ticket.generation,
            outcome,
        });
        true
    }
}
