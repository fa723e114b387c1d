//! Text summarization page.
//!
//! Same MVI layout as the caption page:
//! - `state.rs` - Input text and request outcome
//! - `intent.rs` - Edits, Clear, request lifecycle
//! - `reducer.rs` - State transitions (pure)
//! - `page.rs` - Controller: validation and request tickets
//! - `view.rs` - Rendering

mod intent;
mod page;
mod reducer;
mod state;
mod view;

pub use intent::SummarizeIntent;
pub use page::SummarizePage;
pub use reducer::SummarizeReducer;
pub use state::{SummarizeState, MAX_CHAR_COUNT};
pub use view::render_summarize_page;
