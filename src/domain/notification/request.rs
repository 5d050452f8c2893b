//! Notification request value object

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Title used when neither flags nor preferences provide one
pub const DEFAULT_TITLE: &str = "Drive Backup Notifications";

/// Body used when neither flags nor preferences provide one
pub const DEFAULT_BODY: &str = "Notification";

/// Identifier attached to every request. Adapters send it as the
/// synchronous-notification hint, so servers that honour the hint replace
/// the previous notification instead of stacking a new one.
pub const NOTIFICATION_IDENTIFIER: &str = "com.geoh2os8295.Drive-Backup-Notifications";

/// How long a delivered notification stays before it is cleared
pub const CLEAR_DELAY: Duration = Duration::from_secs(15);

/// A single notification to hand to the notification center.
/// Built right before submission and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    title: String,
    body: String,
    sound: bool,
    image: Option<PathBuf>,
}

impl NotificationRequest {
    /// Create a request with the default sound
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            sound: true,
            image: None,
        }
    }

    /// Enable or disable the notification sound
    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    /// Attach an image shown next to the text
    pub fn with_image(mut self, image: Option<PathBuf>) -> Self {
        self.image = image;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn identifier(&self) -> &'static str {
        NOTIFICATION_IDENTIFIER
    }

    pub fn sound(&self) -> bool {
        self.sound
    }

    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_BODY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_builtin_text() {
        let request = NotificationRequest::default();
        assert_eq!(request.title(), "Drive Backup Notifications");
        assert_eq!(request.body(), "Notification");
        assert!(request.sound());
        assert!(request.image().is_none());
    }

    #[test]
    fn with_image_sets_path() {
        let request = NotificationRequest::new("t", "b")
            .with_image(Some(PathBuf::from("/opt/drive-backup/icon.png")));
        assert_eq!(request.image(), Some(Path::new("/opt/drive-backup/icon.png")));
    }

    #[test]
    fn identifier_is_constant() {
        let a = NotificationRequest::new("Backup complete", "42 files");
        let b = NotificationRequest::new("Backup failed", "Drive not found");
        assert_eq!(a.identifier(), b.identifier());
        assert_eq!(a.identifier(), NOTIFICATION_IDENTIFIER);
    }

    #[test]
    fn with_sound_disables_sound() {
        let request = NotificationRequest::new("t", "b").with_sound(false);
        assert!(!request.sound());
    }

    #[test]
    fn clear_delay_is_fifteen_seconds() {
        assert_eq!(CLEAR_DELAY.as_secs(), 15);
    }
}
