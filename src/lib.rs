pub mod api;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod intake;
pub mod logging;
pub mod preview;
pub mod request;
pub mod ui;
