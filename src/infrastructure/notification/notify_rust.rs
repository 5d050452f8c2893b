//! Cross-platform notification center using notify-rust
//!
//! Works on Windows, macOS, and Linux. Only freedesktop servers let us
//! check availability and close notifications again; elsewhere the OS
//! owns both and the matching calls are no-ops.

use async_trait::async_trait;

use crate::application::ports::{NotificationCenter, NotificationError};
use crate::domain::notification::{
    AuthorizationOptions, AuthorizationStatus, NotificationRequest, DEFAULT_TITLE,
};

#[cfg(all(unix, not(target_os = "macos")))]
use super::SYNCHRONOUS_HINT;

#[cfg(all(unix, not(target_os = "macos")))]
use std::sync::{Arc, Mutex};

#[cfg(all(unix, not(target_os = "macos")))]
const DEFAULT_SOUND: &str = "message-new-instant";

#[cfg(not(all(unix, not(target_os = "macos"))))]
const DEFAULT_SOUND: &str = "Default";

/// Cross-platform notification center using notify-rust
pub struct NotifyRustCenter {
    /// Application name for notifications
    app_name: String,
    /// Windows AUMID or freedesktop desktop entry
    #[cfg_attr(target_os = "macos", allow(dead_code))]
    app_id: Option<String>,
    /// Handles of notifications shown by this process
    #[cfg(all(unix, not(target_os = "macos")))]
    delivered: Arc<Mutex<Vec<notify_rust::NotificationHandle>>>,
}

impl NotifyRustCenter {
    /// Create a new notify-rust center
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_TITLE)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_id: None,
            #[cfg(all(unix, not(target_os = "macos")))]
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the application identity the host groups notifications under
    pub fn with_app_id(mut self, app_id: Option<String>) -> Self {
        self.app_id = app_id;
        self
    }

    fn build(&self, request: &NotificationRequest) -> notify_rust::Notification {
        let mut notification = notify_rust::Notification::new();
        notification
            .appname(&self.app_name)
            .summary(request.title())
            .body(request.body());
        if request.sound() {
            notification.sound_name(DEFAULT_SOUND);
        } else {
            #[cfg(all(unix, not(target_os = "macos")))]
            notification.hint(notify_rust::Hint::SuppressSound(true));
        }

        #[cfg(not(target_os = "macos"))]
        if let Some(image) = request.image() {
            notification.image_path(&image.to_string_lossy());
        }

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            notification.hint(notify_rust::Hint::Custom(
                SYNCHRONOUS_HINT.to_string(),
                request.identifier().to_string(),
            ));
            if let Some(app_id) = &self.app_id {
                notification.hint(notify_rust::Hint::DesktopEntry(app_id.clone()));
            }
        }

        #[cfg(target_os = "windows")]
        if let Some(app_id) = &self.app_id {
            notification.app_id(app_id);
        }

        notification
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn track(&self, handle: notify_rust::NotificationHandle) {
        if let Ok(mut delivered) = self.delivered.lock() {
            delivered.push(handle);
        }
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    fn track<T>(&self, _shown: T) {}

    /// Ask the freedesktop server to identify itself
    #[cfg(all(unix, not(target_os = "macos")))]
    async fn query_server() -> Result<(), NotificationError> {
        tokio::task::spawn_blocking(|| {
            notify_rust::get_server_information()
                .map(|_| ())
                .map_err(|e| NotificationError::ServiceUnavailable(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::ServiceUnavailable(format!("Task join error: {}", e)))?
    }
}

impl Default for NotifyRustCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationCenter for NotifyRustCenter {
    #[cfg(all(unix, not(target_os = "macos")))]
    async fn request_authorization(
        &self,
        _options: AuthorizationOptions,
    ) -> Result<bool, NotificationError> {
        Self::query_server()
            .await
            .map(|()| true)
            .map_err(|e| NotificationError::AuthorizationFailed(e.to_string()))
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn request_authorization(
        &self,
        _options: AuthorizationOptions,
    ) -> Result<bool, NotificationError> {
        // The OS prompts on first delivery
        Ok(true)
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    async fn authorization_status(&self) -> AuthorizationStatus {
        match Self::query_server().await {
            Ok(()) => AuthorizationStatus::Authorized,
            Err(_) => AuthorizationStatus::Denied,
        }
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::Authorized
    }

    async fn add(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let notification = self.build(request);

        // notify-rust operations can block, so run in spawn_blocking
        let shown = tokio::task::spawn_blocking(move || notification.show())
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
            .map_err(|e| NotificationError::SendFailed(e.to_string()))?;

        self.track(shown);
        Ok(())
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    async fn remove_all_delivered(&self) -> Result<(), NotificationError> {
        let handles = self
            .delivered
            .lock()
            .map(|mut delivered| std::mem::take(&mut *delivered))
            .map_err(|e| NotificationError::ClearFailed(e.to_string()))?;
        if handles.is_empty() {
            return Ok(());
        }

        tokio::task::spawn_blocking(move || {
            for handle in handles {
                handle.close();
            }
        })
        .await
        .map_err(|e| NotificationError::ClearFailed(format!("Task join error: {}", e)))
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn remove_all_delivered(&self) -> Result<(), NotificationError> {
        Ok(())
    }
}
