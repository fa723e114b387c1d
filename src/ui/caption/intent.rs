//! Intents for the caption page.

use crate::error::ValidationError;
use crate::intake::SelectedFile;
use crate::preview::PreviewId;
use crate::request::RequestOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CaptionIntent {
    /// A file passed intake; its preview is already bound.
    FileAccepted { file: SelectedFile, preview: PreviewId },

    /// A file failed intake (wrong type, unreadable path, empty clipboard).
    FileRejected { error: ValidationError },

    /// User pressed Remove.
    Remove,

    /// A caption request was sent.
    Started { generation: u64 },

    /// A caption request settled.
    Settled {
        generation: u64,
        outcome: RequestOutcome,
    },

    /// Open the browse prompt.
    OpenPrompt,

    /// Text typed or pasted into the browse prompt.
    PromptInput { text: String },

    PromptBackspace,

    ClosePrompt,
}

impl Intent for CaptionIntent {}
