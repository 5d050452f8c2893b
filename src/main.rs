//! Drive Backup Notifications entry point

use std::process::ExitCode;

use clap::Parser;

use drive_backup_notifications::cli::{
    app::{load_merged_config, run_notify, EXIT_ERROR},
    args::{Cli, Commands, NotifyOptions},
    config_cmd::handle_config_command,
    host_args::normalize_host_args,
    presenter::Presenter,
};
use drive_backup_notifications::domain::config::AppConfig;
use drive_backup_notifications::infrastructure::TomlPreferencesStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_host_args(std::env::args_os()));
    let presenter = if cli.verbose || cli.debug_mode() {
        Presenter::verbose()
    } else {
        Presenter::new()
    };

    let app_name = cli.app_name().to_string();

    let store = match cli.preferences.clone() {
        Some(path) => Ok(TomlPreferencesStore::with_path(path)),
        None => TomlPreferencesStore::new(),
    };

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let result = match &store {
            Ok(store) => handle_config_command(action, store, &presenter).await,
            Err(e) => Err(e.clone()),
        };
        if let Err(e) = result {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        title: cli.title,
        body: cli.body,
        sound: if cli.no_sound { Some(false) } else { None },
    };

    // Merge preferences
    let config = match &store {
        Ok(store) => load_merged_config(cli_config, store, &presenter).await,
        Err(e) => {
            presenter.step_warn(&format!("Ignoring preferences: {}", e));
            AppConfig::defaults().merge(cli_config)
        }
    };

    let options = NotifyOptions {
        request: config.to_request().with_image(cli.image),
        authorization_only: cli.authorization,
        once: cli.once,
        backend: cli.backend.into(),
        app_name,
        app_id: cli.app_id,
    };

    run_notify(options, &presenter).await
}
