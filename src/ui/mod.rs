//! Terminal front end: header bar, routed pages, footer hints.

pub mod about;
pub mod app;
pub mod caption;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod router;
pub mod runtime;
pub mod summarize;
pub mod terminal_guard;
pub mod theme;
pub mod widgets;
pub mod worker;

pub use runtime::run;
