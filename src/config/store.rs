//! Shared configuration storage.
//!
//! Holds the effective configuration (file values with CLI overrides
//! applied) together with the path it was loaded from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-memory override (e.g. from command line flags).
    ///
    /// The updated config is validated before it replaces the current one.
    pub fn update<F>(&self, apply: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut Config),
    {
        let mut next = self.get();
        apply(&mut next);
        next.validate()?;
        *self.inner.write() = next;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
