//! Yahrzeit Client - page handlers for the Yahrzeit web app.
//!
//! # Architecture
//!
//! - [`request`] builds every request as a pure function of its inputs,
//!   including the anti-forgery token
//! - [`YahrzeitApi`] sends requests; [`ApiClient`] does so over HTTP with
//!   `reqwest`
//! - [`Page`] is the surface handlers act on: navigation, alerts, label text
//!   and visibility
//! - [`handlers`] holds one handler per page
//!
//! # Example
//!
//! ```rust,ignore
//! use yahrzeit_client::{AccountFormHandler, ApiClient, ClientConfig};
//! use yahrzeit_core::Credentials;
//!
//! let config = ClientConfig::from_env()?;
//! let api = ApiClient::new(&config)?;
//! let handler = AccountFormHandler::new(api, page, config.require_csrf_token()?);
//!
//! handler
//!     .on_submit(Credentials::new("me@example.com", "Abcdef1!", "Abcdef1!"))
//!     .await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod request;

pub use api::{ApiClient, YahrzeitApi};
pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use handlers::{
    AccountFormHandler, LookupOutcome, PlaceDateLookupHandler, ResultActionHandler,
    SubmitOutcome,
};
pub use page::Page;
pub use request::ApiRequest;
