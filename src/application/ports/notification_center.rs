//! Notification center port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{
    AuthorizationOptions, AuthorizationStatus, NotificationRequest,
};

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("notify-send not found")]
    NotifySendNotFound,

    #[error("Notification service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Authorization request failed: {0}")]
    AuthorizationFailed(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),

    #[error("Failed to clear notifications: {0}")]
    ClearFailed(String),
}

/// Port for the host notification service
#[async_trait]
pub trait NotificationCenter: Send + Sync {
    /// Ask the host for permission to show notifications.
    ///
    /// Asking again after the user answered is harmless.
    ///
    /// # Returns
    /// Whether permission was granted
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, NotificationError>;

    /// Current permission state for this app
    async fn authorization_status(&self) -> AuthorizationStatus;

    /// Deliver a notification immediately.
    async fn add(&self, request: &NotificationRequest) -> Result<(), NotificationError>;

    /// Remove every notification this app delivered that is still on screen.
    async fn remove_all_delivered(&self) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed center types
#[async_trait]
impl NotificationCenter for Box<dyn NotificationCenter> {
    async fn request_authorization(
        &self,
        options: AuthorizationOptions,
    ) -> Result<bool, NotificationError> {
        self.as_ref().request_authorization(options).await
    }

    async fn authorization_status(&self) -> AuthorizationStatus {
        self.as_ref().authorization_status().await
    }

    async fn add(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().add(request).await
    }

    async fn remove_all_delivered(&self) -> Result<(), NotificationError> {
        self.as_ref().remove_all_delivered().await
    }
}
