//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the desktop notification service and the filesystem.

pub mod config;
pub mod marker;
pub mod notification;

// Re-export adapters
pub use config::TomlPreferencesStore;
pub use marker::AuthorizationMarker;
pub use notification::{create_center, Backend, NotifyRustCenter, NotifySendCenter};
