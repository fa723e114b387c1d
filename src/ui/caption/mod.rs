//! Image captioning page.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Selected file, preview id, request outcome, browse prompt
//! - `intent.rs` - User actions and settled requests
//! - `reducer.rs` - State transitions (pure)
//! - `page.rs` - Controller: intake, preview slot, request tickets
//! - `view.rs` - Rendering

mod intent;
mod page;
mod reducer;
mod state;
mod view;

pub use intent::CaptionIntent;
pub use page::CaptionPage;
pub use reducer::CaptionReducer;
pub use state::CaptionState;
pub use view::render_caption_page;
