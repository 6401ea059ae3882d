//! solex - Solana account explorer for the terminal
//!
//! Looks up the balance and recent transaction signatures of an address
//! through a small HTTP backend.

pub mod api;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

// Re-export commonly used types
pub use app::{App, LookupOutcome, LookupRequest, LookupStatus, Tab};
pub use config::Config;
pub use error::{LookupError, RequestFailure};
