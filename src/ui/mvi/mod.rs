//! Model-View-Intent primitives shared by the pages.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a page renders, as plain data
//! - **Intent**: a user action or a settled request
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Resources with a lifecycle (preview handles, in-flight requests) are
//! held next to the state by the page controller, never inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
