//! Main app runner for the notify flow

use std::process::ExitCode;

use crate::application::ports::{ConfigStore, NotificationCenter};
use crate::application::{NotifyCallbacks, NotifyInput, NotifyOutcome, NotifyUseCase};
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_center, AuthorizationMarker};

use super::args::NotifyOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Run the notify flow. Always exits successfully.
pub async fn run_notify(options: NotifyOptions, presenter: &Presenter) -> ExitCode {
    let center = create_center(options.backend, &options.app_name, options.app_id.clone());
    presenter.step(&format!("Using {} backend", options.backend));

    let marker = AuthorizationMarker::new();
    let outcome = execute_notify(options, center, marker.as_ref(), presenter).await;
    if let Some(outcome) = outcome {
        presenter.step(&format!("Finished: {:?}", outcome));
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Run the use case against a center.
///
/// Without a marker location `--once` prompts every time.
///
/// # Returns
/// None when `--once` found an existing marker and nothing ran
pub async fn execute_notify<N: NotificationCenter>(
    options: NotifyOptions,
    center: N,
    marker: Option<&AuthorizationMarker>,
    presenter: &Presenter,
) -> Option<NotifyOutcome> {
    if options.authorization_only && options.once {
        match marker {
            Some(marker) if marker.exists() => {
                presenter.step(&format!(
                    "Already prompted for authorization ({})",
                    marker.path().display()
                ));
                return None;
            }
            Some(marker) => {
                if let Err(e) = marker.create().await {
                    presenter.step_warn(&format!("Failed to write authorization marker: {}", e));
                }
            }
            None => presenter.step_warn("No data directory for the authorization marker"),
        }
    }

    let use_case = NotifyUseCase::new(center);
    let input = NotifyInput {
        request: options.request,
        authorization_only: options.authorization_only,
    };

    Some(use_case.execute(input, step_callbacks(*presenter)).await)
}

/// Callbacks that report each step through the presenter
fn step_callbacks(presenter: Presenter) -> NotifyCallbacks {
    NotifyCallbacks {
        on_authorization: Some(Box::new(move |granted| {
            presenter.step(&format!("Authorization granted: {}", granted));
        })),
        on_status: Some(Box::new(move |status| {
            presenter.step(&format!("Authorization status: {}", status));
        })),
        on_submitted: Some(Box::new(move |request| {
            presenter.step(&format!(
                "Submitted {} \"{}\"; clearing in {}s",
                request.identifier(),
                request.title(),
                crate::domain::CLEAR_DELAY.as_secs()
            ));
        })),
        on_error: Some(Box::new(move |e| presenter.step_warn(&e.to_string()))),
        on_cleared: Some(Box::new(move || {
            presenter.step("Cleared delivered notifications");
        })),
    }
}

/// Load and merge preferences with CLI values
pub async fn load_merged_config<S: ConfigStore>(
    cli_config: AppConfig,
    store: &S,
    presenter: &Presenter,
) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.step_warn(&format!("Ignoring preferences: {}", e));
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NotificationError;
    use crate::domain::error::ConfigError;
    use crate::domain::notification::{
        AuthorizationOptions, AuthorizationStatus, NotificationRequest,
    };
    use crate::infrastructure::{Backend, TomlPreferencesStore};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingCenter {
        requests: Arc<AtomicUsize>,
        adds: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl NotificationCenter for CountingCenter {
        async fn request_authorization(
            &self,
            _options: AuthorizationOptions,
        ) -> Result<bool, NotificationError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }

        async fn authorization_status(&self) -> AuthorizationStatus {
            AuthorizationStatus::Authorized
        }

        async fn add(&self, _request: &NotificationRequest) -> Result<(), NotificationError> {
            self.adds.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn remove_all_delivered(&self) -> Result<(), NotificationError> {
            Ok(())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl ConfigStore for BrokenStore {
        async fn load(&self) -> Result<AppConfig, ConfigError> {
            Err(ConfigError::ParseError("expected value".to_string()))
        }

        async fn save(&self, _config: &AppConfig) -> Result<(), ConfigError> {
            Ok(())
        }

        fn path(&self) -> std::path::PathBuf {
            std::path::PathBuf::from("/broken/preferences.toml")
        }

        fn exists(&self) -> bool {
            true
        }

        async fn init(&self) -> Result<(), ConfigError> {
            Ok(())
        }
    }

    fn authorization_options(once: bool) -> NotifyOptions {
        NotifyOptions {
            request: NotificationRequest::default(),
            authorization_only: true,
            once,
            backend: Backend::NotifyRust,
            app_name: "Drive Backup".to_string(),
            app_id: None,
        }
    }

    #[tokio::test]
    async fn once_creates_marker_then_skips() {
        let dir = tempfile::tempdir().unwrap();
        let marker = AuthorizationMarker::with_path(dir.path().join("notification-authorization"));
        let presenter = Presenter::new();

        let center = CountingCenter::default();
        let requests = Arc::clone(&center.requests);
        let first = execute_notify(authorization_options(true), center, Some(&marker), &presenter).await;
        assert_eq!(first, Some(NotifyOutcome::AuthorizationRequested));
        assert!(marker.exists());
        assert_eq!(requests.load(Ordering::SeqCst), 1);

        let center = CountingCenter::default();
        let requests = Arc::clone(&center.requests);
        let second = execute_notify(authorization_options(true), center, Some(&marker), &presenter).await;
        assert_eq!(second, None);
        assert_eq!(requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn without_once_marker_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let marker = AuthorizationMarker::with_path(dir.path().join("notification-authorization"));
        marker.create().await.unwrap();

        let center = CountingCenter::default();
        let requests = Arc::clone(&center.requests);
        let outcome =
            execute_notify(authorization_options(false), center, Some(&marker), &Presenter::new()).await;

        assert_eq!(outcome, Some(NotifyOutcome::AuthorizationRequested));
        assert_eq!(requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn once_without_marker_location_still_prompts() {
        let center = CountingCenter::default();
        let requests = Arc::clone(&center.requests);
        let outcome =
            execute_notify(authorization_options(true), center, None, &Presenter::new()).await;

        assert_eq!(outcome, Some(NotifyOutcome::AuthorizationRequested));
        assert_eq!(requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn full_flow_submits_once() {
        let dir = tempfile::tempdir().unwrap();
        let marker = AuthorizationMarker::with_path(dir.path().join("notification-authorization"));
        let options = NotifyOptions {
            authorization_only: false,
            ..authorization_options(false)
        };

        let center = CountingCenter::default();
        let adds = Arc::clone(&center.adds);
        let outcome = execute_notify(options, center, Some(&marker), &Presenter::new()).await;

        assert_eq!(outcome, Some(NotifyOutcome::Delivered));
        assert_eq!(adds.load(Ordering::SeqCst), 1);
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn merged_config_prefers_cli_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferencesStore::with_path(dir.path().join("preferences.toml"));
        store
            .save(&AppConfig {
                title: Some("Saved title".to_string()),
                body: Some("Saved body".to_string()),
                sound: Some(false),
            })
            .await
            .unwrap();

        let cli_config = AppConfig {
            title: Some("Flag title".to_string()),
            ..Default::default()
        };
        let merged = load_merged_config(cli_config, &store, &Presenter::new()).await;

        assert_eq!(merged.title_or_default(), "Flag title");
        assert_eq!(merged.body_or_default(), "Saved body");
        assert!(!merged.sound_or_default());
    }

    #[tokio::test]
    async fn merged_config_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferencesStore::with_path(dir.path().join("preferences.toml"));

        let merged = load_merged_config(AppConfig::empty(), &store, &Presenter::new()).await;

        assert_eq!(merged, AppConfig::defaults());
    }

    #[tokio::test]
    async fn broken_preferences_fall_back_to_defaults() {
        let merged = load_merged_config(AppConfig::empty(), &BrokenStore, &Presenter::new()).await;
        assert_eq!(merged, AppConfig::defaults());
    }
}
