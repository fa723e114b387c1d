//! State for the summarize page.

use crate::error::ValidationError;
use crate::request::RequestOutcome;
use crate::ui::mvi::UiState;

/// Input limit, in characters.
pub const MAX_CHAR_COUNT: usize = 2000;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummarizeState {
    /// Never longer than [`MAX_CHAR_COUNT`] characters.
    pub input: String,
    pub outcome: RequestOutcome,
    /// Set when Generate is pressed with nothing to send. The previous
    /// summary stays visible.
    pub validation: Option<ValidationError>,
}

impl UiState for SummarizeState {}

impl SummarizeState {
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn characters_left(&self) -> usize {
        MAX_CHAR_COUNT.saturating_sub(self.char_count())
    }

    pub fn is_generating(&self) -> bool {
        self.outcome.is_in_flight()
    }

    /// Generate stays enabled with an empty input; pressing it then shows
    /// the empty-text error.
    pub fn can_generate(&self) -> bool {
        !self.is_generating()
    }

    pub fn can_clear(&self) -> bool {
        !self.is_generating()
    }

    /// The summary to show. An empty summary counts as none, so the
    /// placeholder stays visible.
    pub fn summary(&self) -> Option<&str> {
        self.outcome.result().filter(|text| !text.is_empty())
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.validation {
            Some(error) => Some(error.to_string()),
            None => self.outcome.error_message(),
        }
    }
}
