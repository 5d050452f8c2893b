//! Preferences port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for preferences storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load preferences from storage.
    ///
    /// # Returns
    /// The loaded config (all fields None if the file doesn't exist)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Save preferences to storage.
    ///
    /// # Arguments
    /// * `config` - The preferences to save
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Get the preferences file path.
    fn path(&self) -> PathBuf;

    /// Check if the preferences file exists.
    fn exists(&self) -> bool;

    /// Initialize the preferences file with defaults.
    /// Fails if file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
