//! Reducer for the caption page.

use crate::request::RequestOutcome;
use crate::ui::mvi::Reducer;

use super::intent::CaptionIntent;
use super::state::CaptionState;

pub struct CaptionReducer;

impl Reducer for CaptionReducer {
    type State = CaptionState;
    type Intent = CaptionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CaptionIntent::FileAccepted { file, preview } => {
                if !state.accepts_files() {
                    return state;
                }
                // New selection drops any previous caption or error.
                CaptionState {
                    selected: Some(file),
                    preview: Some(preview),
                    outcome: RequestOutcome::NotStarted,
                    validation: None,
                    prompt: None,
                }
            }

            CaptionIntent::FileRejected { error } => {
                if !state.accepts_files() {
                    return state;
                }
                // Selection, preview and caption all stay.
                CaptionState {
                    validation: Some(error),
                    ..state
                }
            }

            CaptionIntent::Remove => {
                if !state.can_remove() {
                    return state;
                }
                CaptionState::default()
            }

            CaptionIntent::Started { generation } => {
                if !state.can_generate() {
                    return state;
                }
                CaptionState {
                    outcome: RequestOutcome::InFlight { generation },
                    validation: None,
                    prompt: None,
                    ..state
                }
            }

            CaptionIntent::Settled {
                generation,
                outcome,
            } => {
                if !state.outcome.awaits(generation) {
                    return state;
                }
                CaptionState { outcome, ..state }
            }

            CaptionIntent::OpenPrompt => {
                if !state.accepts_files() || state.prompt.is_some() {
                    return state;
                }
                CaptionState {
                    prompt: Some(String::new()),
                    ..state
                }
            }

            CaptionIntent::PromptInput { text } => match state.prompt {
                Some(mut prompt) => {
                    prompt.push_str(&text);
                    CaptionState {
                        prompt: Some(prompt),
                        ..state
                    }
                }
                None => state,
            },

            CaptionIntent::PromptBackspace => match state.prompt {
                Some(mut prompt) => {
                    prompt.pop();
                    CaptionState {
                        prompt: Some(prompt),
                        ..state
                    }
                }
                None => state,
            },

            CaptionIntent::ClosePrompt => CaptionState {
                prompt: None,
                ..state
            },
        }
    }
}
