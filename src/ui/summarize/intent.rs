//! Intents for the summarize page.

use crate::error::ValidationError;
use crate::request::RequestOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummarizeIntent {
    /// Typed or pasted text, appended at the end of the input.
    Insert { text: String },

    Backspace,

    /// Empty the input, the summary and the error.
    Clear,

    /// Generate was pressed with nothing to send.
    Rejected { error: ValidationError },

    /// A summarize request was sent.
    Started { generation: u64 },

    /// A summarize request settled.
    Settled {
        generation: u64,
        outcome: RequestOutcome,
    },
}

impl Intent for SummarizeIntent {}
