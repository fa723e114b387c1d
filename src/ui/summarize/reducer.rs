//! Reducer for the summarize page.

use crate::request::RequestOutcome;
use crate::ui::mvi::Reducer;

use super::intent::SummarizeIntent;
use super::state::{SummarizeState, MAX_CHAR_COUNT};

pub struct SummarizeReducer;

impl Reducer for SummarizeReducer {
    type State = SummarizeState;
    type Intent = SummarizeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummarizeIntent::Insert { text } => {
                let room = MAX_CHAR_COUNT.saturating_sub(state.char_count());
                if room == 0 || text.is_empty() {
                    return state;
                }
                let mut input = state.input;
                input.extend(text.chars().take(room));
                SummarizeState { input, ..state }
            }

            SummarizeIntent::Backspace => {
                let mut input = state.input;
                input.pop();
                SummarizeState { input, ..state }
            }

            SummarizeIntent::Clear => {
                if !state.can_clear() {
                    return state;
                }
                SummarizeState::default()
            }

            SummarizeIntent::Rejected { error } => {
                if state.is_generating() {
                    return state;
                }
                SummarizeState {
                    validation: Some(error),
                    ..state
                }
            }

            SummarizeIntent::Started { generation } => {
                if !state.can_generate() {
                    return state;
                }
                SummarizeState {
                    outcome: RequestOutcome::InFlight { generation },
                    validation: None,
                    ..state
                }
            }

            SummarizeIntent::Settled {
                generation,
                outcome,
            } => {
                if !state.outcome.awaits(generation) {
                    return state;
                }
                SummarizeState { outcome, ..state }
            }
        }
    }
}
