//! Drive Backup Notifications - notification helper for Drive Backup
//!
//! Asks the desktop notification service for permission, shows a single
//! notification, clears it after a fixed delay and exits.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notification request, authorization state, preferences and errors
//! - **Application**: The notify use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send, TOML preferences)
//! - **CLI**: Command-line interface, argument parsing and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
