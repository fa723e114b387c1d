//! Request lifecycle shared by the caption and summarize pages.
//!
//! ```text
//! NotStarted ──begin──→ InFlight{gen} ──settle(gen)──→ Succeeded | Failed
//!      ↑                                                     │
//!      └──────────────────── begin again ────────────────────┘
//! ```
//!
//! A page issues a [`Ticket`] when it starts a request and only accepts a
//! [`Settlement`] carrying the generation it is still waiting for. Late
//! responses for a torn-down or restarted page are therefore dropped.

mod outcome;
pub mod reducer;
mod submission;

pub use outcome::RequestOutcome;
pub use submission::{execute, Settlement, Submission, Ticket};

/// The two actions the front end can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Caption,
    Summarize,
}

impl Action {
    /// Endpoint path on the inference service.
    pub fn path(self) -> &'static str {
        match self {
            Action::Caption => "/caption",
            Action::Summarize => "/summarize",
        }
    }

    /// What the action produces, as used in user-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            Action::Caption => "caption",
            Action::Summarize => "summary",
        }
    }

    /// JSON field holding the result in a successful response.
    pub fn result_field(self) -> &'static str {
        self.noun()
    }
}
