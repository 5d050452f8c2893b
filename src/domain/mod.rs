//! Domain layer - Core types
//!
//! Contains the notification request value object, authorization
//! state, preferences and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use notification::{
    AuthorizationOptions, AuthorizationStatus, NotificationRequest, CLEAR_DELAY,
    DEFAULT_BODY, DEFAULT_TITLE, NOTIFICATION_IDENTIFIER,
};
