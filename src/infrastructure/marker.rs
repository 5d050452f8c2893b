//! Marker file recording that the user was already asked for permission

use std::path::PathBuf;

use tokio::fs;

/// Directory shared with the Drive Backup host tool
const HOST_APP_DIR: &str = "drive-backup";

const MARKER_FILE: &str = "notification-authorization";

/// Authorization prompt marker
pub struct AuthorizationMarker {
    path: PathBuf,
}

impl AuthorizationMarker {
    /// Marker in the platform data directory.
    ///
    /// # Returns
    /// None when neither the data directory nor the home directory is known
    pub fn new() -> Option<Self> {
        let data_dir = resolve_data_dir(dirs::data_dir(), dirs::home_dir())?;

        Some(Self {
            path: data_dir.join(HOST_APP_DIR).join(MARKER_FILE),
        })
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }

    /// Whether the prompt was already shown
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Record the prompt, creating parent directories as needed
    pub async fn create(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, b"").await
    }
}

/// Platform data dir, else `$HOME/.local/share`
fn resolve_data_dir(data_dir: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    data_dir.or_else(|| home_dir.map(|home| home.join(".local").join("share")))
}
