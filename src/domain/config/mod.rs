//! Persisted user preferences

mod app_config;

pub use app_config::AppConfig;
