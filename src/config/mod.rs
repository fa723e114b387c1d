mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, LoggingConfig, ServiceConfig, UiConfig};
