//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::notification::{NotificationRequest, DEFAULT_TITLE};
use crate::infrastructure::Backend;

/// Drive Backup Notifications - show one notification and clear it
#[derive(Parser, Debug)]
#[command(name = "drive-backup-notifications")]
#[command(version)]
#[command(about = "Request notification permission, show one notification, clear it after 15 seconds")]
#[command(long_about = None)]
pub struct Cli {
    /// Request authorization to allow notifications and exit
    #[arg(short = 'a', long)]
    pub authorization: bool,

    /// The title to use for the notification
    #[arg(short = 't', long, value_name = "TITLE")]
    pub title: Option<String>,

    /// The body to use for the notification
    #[arg(short = 'b', long, value_name = "BODY")]
    pub body: Option<String>,

    /// Deliver the notification without sound
    #[arg(long)]
    pub no_sound: bool,

    /// Image shown next to the notification text
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Application name the notification is shown under
    #[arg(long, visible_alias = "appname", value_name = "NAME")]
    pub app_name: Option<String>,

    /// Windows AUMID or freedesktop desktop entry to group notifications under
    #[arg(long, visible_aliases = ["aumi", "appid"], value_name = "ID")]
    pub app_id: Option<String>,

    /// Only prompt for authorization if this user was never prompted
    #[arg(long, requires = "authorization")]
    pub once: bool,

    /// Notification backend
    #[arg(long, value_name = "BACKEND", default_value = "notify-rust")]
    pub backend: BackendArg,

    /// Report each step on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Added by Xcode when it runs the app
    #[arg(long = "NSDocumentRevisionsDebugMode", hide = true, value_name = "YES|NO")]
    pub debug_mode: Option<String>,

    /// Preferences file override
    #[arg(long, hide = true, value_name = "PATH")]
    pub preferences: Option<PathBuf>,

    /// Preferences subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage persisted notification preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create preferences file with defaults
    Init,
    /// Set a preference
    Set {
        /// Preference key
        key: String,
        /// Preference value
        value: String,
    },
    /// Get a preference
    Get {
        /// Preference key
        key: String,
    },
    /// List all preferences
    List,
    /// Show preferences file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    NotifyRust,
    NotifySend,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::NotifyRust => Backend::NotifyRust,
            BackendArg::NotifySend => Backend::NotifySend,
        }
    }
}

impl Cli {
    /// Whether the hidden Xcode flag asked for debug mode
    pub fn debug_mode(&self) -> bool {
        self.debug_mode.as_deref() == Some("YES")
    }

    /// Application name, falling back to the default title
    pub fn app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Parsed notify options
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub request: NotificationRequest,
    pub authorization_only: bool,
    pub once: bool,
    pub backend: Backend,
    pub app_name: String,
    pub app_id: Option<String>,
}

/// Valid preference keys
pub const VALID_CONFIG_KEYS: &[&str] = &["title", "body", "sound"];

/// Check if a preference key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
