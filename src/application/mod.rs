//! Application layer - Use cases and port interfaces
//!
//! Contains the notify flow and the trait definitions
//! for external system interactions.

pub mod notify;
pub mod ports;

// Re-export use cases
pub use notify::{NotifyCallbacks, NotifyInput, NotifyOutcome, NotifyUseCase};
