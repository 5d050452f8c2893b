//! Preferences storage adapters

mod toml_store;

pub use toml_store::TomlPreferencesStore;
