//! State for the caption page.

use crate::error::ValidationError;
use crate::intake::SelectedFile;
use crate::preview::PreviewId;
use crate::request::RequestOutcome;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaptionState {
    pub selected: Option<SelectedFile>,
    /// Preview bound to `selected`; set and cleared together with it.
    pub preview: Option<PreviewId>,
    pub outcome: RequestOutcome,
    /// Last intake rejection. Kept apart from `outcome` so a rejected file
    /// leaves the caption on screen.
    pub validation: Option<ValidationError>,
    /// Path being typed into the browse prompt, when open.
    pub prompt: Option<String>,
}

impl UiState for CaptionState {}

impl CaptionState {
    pub fn is_generating(&self) -> bool {
        self.outcome.is_in_flight()
    }

    /// Generate is enabled with a file selected and no request in flight.
    pub fn can_generate(&self) -> bool {
        self.selected.is_some() && !self.is_generating()
    }

    pub fn can_remove(&self) -> bool {
        self.selected.is_some() && !self.is_generating()
    }

    /// Intake (browse, drop, clipboard) is locked while generating.
    pub fn accepts_files(&self) -> bool {
        !self.is_generating()
    }

    pub fn caption(&self) -> Option<&str> {
        self.outcome.result().filter(|text| !text.is_empty())
    }

    /// An intake rejection takes the place of the request error.
    pub fn error_message(&self) -> Option<String> {
        match &self.validation {
            Some(error) => Some(error.to_string()),
            None => self.outcome.error_message(),
        }
    }

    pub fn is_prompt_open(&self) -> bool {
        self.prompt.is_some()
    }
}
