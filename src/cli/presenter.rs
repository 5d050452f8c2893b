//! CLI presenter for output formatting

use colored::*;

/// Presenter for CLI output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    verbose: bool,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Presenter that also prints step messages
    pub fn verbose() -> Self {
        Self { verbose: true }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a step of the notify flow (verbose only)
    pub fn step(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", "→".dimmed(), message);
        }
    }

    /// Print a swallowed failure (verbose only)
    pub fn step_warn(&self, message: &str) {
        if self.verbose {
            self.warn(message);
        }
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}
