//! Authorization state for the notification center

use std::fmt;

/// Per-app permission state as reported by the notification center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    /// The user has not been asked yet
    #[default]
    NotDetermined,
    /// The user refused, or no notification service is available
    Denied,
    /// Notifications may be shown
    Authorized,
    /// Delivered quietly without an explicit grant
    Provisional,
}

impl AuthorizationStatus {
    /// Only an explicit grant allows submission
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}

impl fmt::Display for AuthorizationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotDetermined => "not determined",
            Self::Denied => "denied",
            Self::Authorized => "authorized",
            Self::Provisional => "provisional",
        };
        write!(f, "{}", s)
    }
}

/// Capabilities requested from the notification center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthorizationOptions {
    pub alert: bool,
    pub sound: bool,
}

impl AuthorizationOptions {
    /// Alert and sound, the set the notifier always asks for
    pub const fn alert_and_sound() -> Self {
        Self {
            alert: true,
            sound: true,
        }
    }
}
