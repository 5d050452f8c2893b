//! Preferences value object

use serde::{Deserialize, Serialize};

use crate::domain::notification::{NotificationRequest, DEFAULT_BODY, DEFAULT_TITLE};

/// Notification preferences.
/// All fields are optional to support partial files and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: Option<String>,
    pub body: Option<String>,
    pub sound: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            title: Some(DEFAULT_TITLE.to_string()),
            body: Some(DEFAULT_BODY.to_string()),
            sound: Some(true),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            title: other.title.or(self.title),
            body: other.body.or(self.body),
            sound: other.sound.or(self.sound),
        }
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn body_or_default(&self) -> &str {
        self.body.as_deref().unwrap_or(DEFAULT_BODY)
    }

    /// Get sound setting, or true if not set
    pub fn sound_or_default(&self) -> bool {
        self.sound.unwrap_or(true)
    }

    /// Build the request this config describes
    pub fn to_request(&self) -> NotificationRequest {
        NotificationRequest::new(self.title_or_default(), self.body_or_default())
            .with_sound(self.sound_or_default())
    }
}
