//! Notification domain types

mod authorization;
mod request;

pub use authorization::{AuthorizationOptions, AuthorizationStatus};
pub use request::{
    NotificationRequest, CLEAR_DELAY, DEFAULT_BODY, DEFAULT_TITLE, NOTIFICATION_IDENTIFIER,
};
