//! Subcommand implementations.
//!
//! Each command builds the matching handler with an [`ApiClient`] and a
//! [`ConsolePage`](crate::console::ConsolePage), then fires a single event.
//!
//! [`ApiClient`]: yahrzeit_client::ApiClient

pub mod account;
pub mod result;
pub mod sunset;

use thiserror::Error;
use yahrzeit_client::{ClientError, ConfigError};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A request failed.
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// The handler finished without reaching its goal.
    #[error("{0}")]
    Refused(String),
}
