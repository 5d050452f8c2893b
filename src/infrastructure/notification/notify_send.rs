//! notify-send notification center

use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{NotificationCenter, NotificationError};
use crate::domain::notification::{
    AuthorizationOptions, AuthorizationStatus, NotificationRequest, DEFAULT_TITLE,
};

use super::SYNCHRONOUS_HINT;

/// notify-send notification center.
/// Delivered ids are closed over D-Bus with `gdbus`.
pub struct NotifySendCenter {
    /// Application name for notifications
    app_name: String,
    /// Desktop entry the server groups notifications under
    app_id: Option<String>,
    /// Server ids printed by `notify-send --print-id`
    delivered: Mutex<Vec<u32>>,
}

impl NotifySendCenter {
    /// Create a new notify-send center
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_TITLE)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_id: None,
            delivered: Mutex::new(Vec::new()),
        }
    }

    /// Set the desktop entry name sent with each notification
    pub fn with_app_id(mut self, app_id: Option<String>) -> Self {
        self.app_id = app_id;
        self
    }

    fn args(&self, request: &NotificationRequest) -> Vec<String> {
        let mut args = vec![
            "--app-name".to_string(),
            self.app_name.clone(),
            "--print-id".to_string(),
        ];
        if request.sound() {
            args.push("--hint=string:sound-name:message-new-instant".to_string());
        } else {
            args.push("--hint=boolean:suppress-sound:true".to_string());
        }
        args.push(format!(
            "--hint=string:{}:{}",
            SYNCHRONOUS_HINT,
            request.identifier()
        ));
        if let Some(app_id) = &self.app_id {
            args.push(format!("--hint=string:desktop-entry:{}", app_id));
        }
        if let Some(image) = request.image() {
            args.push("--icon".to_string());
            args.push(image.to_string_lossy().into_owned());
        }
        args.push(request.title().to_string());
        args.push(request.body().to_string());
        args
    }

    /// Check that notify-send can be launched
    async fn check_available() -> Result<(), NotificationError> {
        let status = Command::new("notify-send")
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::ServiceUnavailable(e.to_string())
                }
            })?;

        if !status.success() {
            return Err(NotificationError::ServiceUnavailable(format!(
                "notify-send exited with status: {}",
                status
            )));
        }

        Ok(())
    }

    async fn close(id: u32) -> Result<(), NotificationError> {
        let status = Command::new("gdbus")
            .args([
                "call",
                "--session",
                "--dest",
                "org.freedesktop.Notifications",
                "--object-path",
                "/org/freedesktop/Notifications",
                "--method",
                "org.freedesktop.Notifications.CloseNotification",
                &id.to_string(),
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| NotificationError::ClearFailed(format!("gdbus: {}", e)))?;

        if !status.success() {
            return Err(NotificationError::ClearFailed(format!(
                "gdbus exited with status: {}",
                status
            )));
        }

        Ok(())
    }
}

impl Default for NotifySendCenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the id printed by `notify-send --print-id`
fn parse_id(stdout: &[u8]) -> Option<u32> {
    String::from_utf8_lossy(stdout).trim().parse().ok()
}

#[async_trait]
impl NotificationCenter for NotifySendCenter {
    async fn request_authorization(
        &self,
        _options: AuthorizationOptions,
    ) -> Result<bool, NotificationError> {
        Self::check_available().await.map(|()| true)
    }

    async fn authorization_status(&self) -> AuthorizationStatus {
        match Self::check_available().await {
            Ok(()) => AuthorizationStatus::Authorized,
            Err(_) => AuthorizationStatus::Denied,
        }
    }

    async fn add(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let output = Command::new("notify-send")
            .args(self.args(request))
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotificationError::NotifySendNotFound
                } else {
                    NotificationError::SendFailed(e.to_string())
                }
            })?;

        if !output.status.success() {
            return Err(NotificationError::SendFailed(format!(
                "notify-send exited with status: {}",
                output.status
            )));
        }

        if let Some(id) = parse_id(&output.stdout) {
            if let Ok(mut delivered) = self.delivered.lock() {
                delivered.push(id);
            }
        }

        Ok(())
    }

    async fn remove_all_delivered(&self) -> Result<(), NotificationError> {
        let ids = self
            .delivered
            .lock()
            .map(|mut delivered| std::mem::take(&mut *delivered))
            .map_err(|e| NotificationError::ClearFailed(e.to_string()))?;

        // Close every id even if one fails, report the first failure
        let mut result = Ok(());
        for id in ids {
            if let Err(e) = Self::close(id).await {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_with_sound() {
        let center = NotifySendCenter::with_app_name("TestApp");
        let request = NotificationRequest::new("Backup complete", "Done");
        let args = center.args(&request);
        assert_eq!(
            args,
            vec![
                "--app-name",
                "TestApp",
                "--print-id",
                "--hint=string:sound-name:message-new-instant",
                "--hint=string:x-canonical-private-synchronous:com.geoh2os8295.Drive-Backup-Notifications",
                "Backup complete",
                "Done",
            ]
        );
    }

    #[test]
    fn args_without_sound() {
        let center = NotifySendCenter::new();
        let request = NotificationRequest::new("t", "b").with_sound(false);
        let args = center.args(&request);
        assert!(args.contains(&"--hint=boolean:suppress-sound:true".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("b"));
    }

    #[test]
    fn args_with_image_and_app_id() {
        let center =
            NotifySendCenter::with_app_name("Drive Backup").with_app_id(Some("drive-backup".to_string()));
        let request = NotificationRequest::new("t", "b")
            .with_image(Some(std::path::PathBuf::from("/opt/drive-backup/icon.png")));
        let args = center.args(&request);

        assert!(args.contains(&"--hint=string:desktop-entry:drive-backup".to_string()));
        let icon = args.iter().position(|a| a == "--icon").unwrap();
        assert_eq!(args[icon + 1], "/opt/drive-backup/icon.png");
        assert_eq!(&args[args.len() - 2..], ["t", "b"]);
    }

    #[tokio::test]
    async fn remove_without_deliveries_is_ok() {
        let center = NotifySendCenter::new();
        assert!(center.remove_all_delivered().await.is_ok());
    }

    #[test]
    fn parse_id_reads_trimmed_number() {
        assert_eq!(parse_id(b"42\n"), Some(42));
        assert_eq!(parse_id(b""), None);
        assert_eq!(parse_id(b"not-an-id"), None);
    }

    #[test]
    fn default_app_name() {
        let center = NotifySendCenter::default();
        assert_eq!(center.app_name, "Drive Backup Notifications");
    }
}
