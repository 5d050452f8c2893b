//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting
//! and the notify flow runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod host_args;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_notify, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction, NotifyOptions};
pub use presenter::Presenter;
