//! Unified error handling for the client.
//!
//! Every handler returns `Result<T, ClientError>`. The user only ever sees the
//! fixed messages in [`crate::page`]; the detail here goes to the logs.

use thiserror::Error;
use yahrzeit_core::{ResultAction, ViewMode};

/// Errors that can occur when talking to the Yahrzeit server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response or request body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Base URL cannot have path segments appended.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The clicked action is not wired for the page's view mode.
    #[error("Action {action} is not available in {mode} mode")]
    ActionUnavailable {
        action: ResultAction,
        mode: ViewMode,
    },

    /// A mutating endpoint answered with a status other than `success`.
    #[error("{endpoint} returned status {status}")]
    ActionFailed { endpoint: String, status: String },
}

/// Result type alias for `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;
