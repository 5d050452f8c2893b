//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary)
//! or notify-send as a freedesktop fallback.

mod notify_rust;
mod notify_send;

pub use notify_rust::NotifyRustCenter;
pub use notify_send::NotifySendCenter;

use std::fmt;
use std::str::FromStr;

use crate::application::ports::NotificationCenter;

/// Freedesktop hint that makes a server replace an earlier notification
/// carrying the same value instead of stacking a new one
pub const SYNCHRONOUS_HINT: &str = "x-canonical-private-synchronous";

/// Available notification center backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    NotifyRust,
    NotifySend,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotifyRust => write!(f, "notify-rust"),
            Self::NotifySend => write!(f, "notify-send"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notify-rust" => Ok(Self::NotifyRust),
            "notify-send" => Ok(Self::NotifySend),
            _ => Err(format!(
                "Invalid backend '{}'. Valid options: notify-rust, notify-send",
                s
            )),
        }
    }
}

/// Create the notification center for the given backend.
///
/// `app_id` is the Windows AUMID or the freedesktop desktop entry name.
pub fn create_center(
    backend: Backend,
    app_name: &str,
    app_id: Option<String>,
) -> Box<dyn NotificationCenter> {
    match backend {
        Backend::NotifyRust => {
            Box::new(NotifyRustCenter::with_app_name(app_name).with_app_id(app_id))
        }
        Backend::NotifySend => {
            Box::new(NotifySendCenter::with_app_name(app_name).with_app_id(app_id))
        }
    }
}
