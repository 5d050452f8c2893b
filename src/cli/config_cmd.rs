//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Preferences file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let mut config = store.load().await?;

    match key {
        "title" => config.title = Some(value.to_string()),
        "body" => config.body = Some(value.to_string()),
        "sound" => config.sound = Some(parse_bool_value(key, value)?),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "title" => config.title,
        "body" => config.body,
        "sound" => config.sound.map(|b| b.to_string()),
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    if !store.exists() {
        presenter.info(&format!(
            "No preferences file at {}, built-in defaults apply",
            store.path().display()
        ));
    }
    let config = store.load().await?;

    presenter.key_value("title", config.title.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("body", config.body.as_deref().unwrap_or(NOT_SET));
    presenter.key_value(
        "sound",
        &config
            .sound
            .map(|b| b.to_string())
            .unwrap_or_else(|| NOT_SET.to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }
    Ok(())
}

fn parse_bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;
    use crate::infrastructure::TomlPreferencesStore;

    fn temp_store() -> (tempfile::TempDir, TomlPreferencesStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TomlPreferencesStore::with_path(dir.path().join("preferences.toml"));
        (dir, store)
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("YES"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = validate_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Valid keys: title, body, sound"));
    }

    #[tokio::test]
    async fn set_updates_only_named_key() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "title", "Backup complete")
            .await
            .unwrap();
        handle_set(&store, &presenter, "sound", "no").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(
            config,
            AppConfig {
                title: Some("Backup complete".to_string()),
                body: None,
                sound: Some(false),
            }
        );
    }

    #[tokio::test]
    async fn set_rejects_bad_bool() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let err = handle_set(&store, &presenter, "sound", "loud")
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn get_unknown_key_fails() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let result = handle_config_command(
            ConfigAction::Get {
                key: "volume".to_string(),
            },
            &store,
            &presenter,
        )
        .await;
        assert!(result.is_err());
    }
}
