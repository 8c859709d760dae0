//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `YAHRZEIT_BASE_URL` - Directory of the app's pages; request paths are
//!   relative to it (default: `http://127.0.0.1:8000/yahrzeit/`)
//! - `YAHRZEIT_CSRF_TOKEN` - Anti-forgery token echoed on mutating requests
//! - `YAHRZEIT_COOKIE` - Raw `Cookie` header; its `csrftoken` entry is used
//!   when `YAHRZEIT_CSRF_TOKEN` is unset
//! - `YAHRZEIT_REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 30)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;
use yahrzeit_core::CsrfToken;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/yahrzeit/";
const DEFAULT_TIMEOUT_SECS: &str = "30";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct ClientConfig {
    /// Directory request paths are joined onto. Always ends in `/`.
    pub base_url: Url,
    /// Anti-forgery token, if one was configured
    pub csrf_token: Option<SecretString>,
    /// Timeout applied to every request
    pub request_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "csrf_token",
                &self.csrf_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("request_timeout", &self.request_timeout)
            .field("sentry_dsn", &self.sentry_dsn)
            .finish()
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any variable source.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(
            &get_or_default(&var, "YAHRZEIT_BASE_URL", DEFAULT_BASE_URL),
            "YAHRZEIT_BASE_URL",
        )?;

        let request_timeout = get_or_default(&var, "YAHRZEIT_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| {
                ConfigError::InvalidEnvVar("YAHRZEIT_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        let csrf_token = match var("YAHRZEIT_CSRF_TOKEN") {
            Some(token) => Some(validate_token(&token, "YAHRZEIT_CSRF_TOKEN")?),
            None => var("YAHRZEIT_COOKIE")
                .map(|cookie| token_from_cookie(&cookie, "YAHRZEIT_COOKIE"))
                .transpose()?,
        };

        Ok(Self {
            base_url,
            csrf_token,
            request_timeout,
            sentry_dsn: var("SENTRY_DSN"),
        })
    }

    /// Configuration pointing at `base_url` with defaults for everything else.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not an absolute URL.
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url, "base_url")?,
            csrf_token: None,
            request_timeout: Duration::from_secs(30),
            sentry_dsn: None,
        })
    }

    /// The configured anti-forgery token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if no token was configured.
    pub fn require_csrf_token(&self) -> Result<CsrfToken, ConfigError> {
        let secret = self
            .csrf_token
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("YAHRZEIT_CSRF_TOKEN".to_string()))?;
        CsrfToken::parse(secret.expose_secret())
            .map_err(|e| ConfigError::InvalidEnvVar("YAHRZEIT_CSRF_TOKEN".to_string(), e.to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(var: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|| default.to_string())
}

/// Parse a base URL, forcing a trailing slash so relative joins stay inside it.
fn parse_base_url(value: &str, var_name: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "cannot be used as a base URL".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Check a token value and wrap it as a secret.
fn validate_token(value: &str, var_name: &str) -> Result<SecretString, ConfigError> {
    let token = CsrfToken::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    Ok(SecretString::from(token.as_str().to_string()))
}

/// Extract the token from a raw cookie header.
fn token_from_cookie(cookie: &str, var_name: &str) -> Result<SecretString, ConfigError> {
    let token = CsrfToken::from_cookie_header(cookie)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    Ok(SecretString::from(token.as_str().to_string()))
}
