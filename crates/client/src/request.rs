//! Pure request builders.
//!
//! Each builder is a function of its inputs only: the anti-forgery token is
//! passed in rather than read from a cookie jar, so requests can be checked
//! without a server.

use reqwest::Method;
use yahrzeit_core::{CSRF_HEADER_NAME, CsrfToken, Endpoint, NewAccount, ResultAction, SunsetQuery};

use crate::error::Result;

const CONTENT_TYPE: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// A request ready to be sent by a [`crate::YahrzeitApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: Endpoint,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Relative path with raw values, e.g. `api/save-res`.
    #[must_use]
    pub fn path(&self) -> String {
        self.endpoint.path()
    }

    /// Value of the first header named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn mutating(endpoint: Endpoint, token: &CsrfToken, body: Option<serde_json::Value>) -> Self {
        Self {
            method: Method::POST,
            endpoint,
            headers: vec![
                (CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
                (CSRF_HEADER_NAME, token.as_str().to_string()),
            ],
            body,
        }
    }
}

/// `POST api/create-account` with a `{email, password}` body.
///
/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn create_account(account: &NewAccount, token: &CsrfToken) -> Result<ApiRequest> {
    let body = serde_json::to_value(account)?;
    Ok(ApiRequest::mutating(
        Endpoint::CreateAccount,
        token,
        Some(body),
    ))
}

/// `GET api/get-sunset-time/{date}/{address}`.
#[must_use]
pub fn sunset_time(query: SunsetQuery) -> ApiRequest {
    ApiRequest {
        method: Method::GET,
        endpoint: Endpoint::SunsetTime(query),
        headers: Vec::new(),
        body: None,
    }
}

/// Empty-bodied POST behind one of the result-page buttons.
#[must_use]
pub fn result_action(action: ResultAction, token: &CsrfToken) -> ApiRequest {
    ApiRequest::mutating(action.endpoint(), token, None)
}
