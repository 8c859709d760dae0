//! Server endpoints and the pages the client navigates to.
//!
//! Endpoint paths are relative to the directory of the current page.
//! Destinations are absolute paths on the same host.

use core::fmt;

use super::sunset::SunsetQuery;

/// A server endpoint the client calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST api/create-account`
    CreateAccount,
    /// `GET api/get-sunset-time/{date}/{address}`
    SunsetTime(SunsetQuery),
    /// `POST api/activate-res`
    ActivateResult,
    /// `POST api/save-res`
    SaveResult,
}

impl Endpoint {
    /// Unencoded path segments, in order.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::CreateAccount => vec!["api", "create-account"],
            Self::SunsetTime(query) => vec![
                "api",
                "get-sunset-time",
                query.date.as_str(),
                query.location_text.as_str(),
            ],
            Self::ActivateResult => vec!["api", "activate-res"],
            Self::SaveResult => vec!["api", "save-res"],
        }
    }

    /// Relative path with raw (unencoded) values, e.g.
    /// `api/get-sunset-time/2024-03-01/Tel Aviv, Israel`.
    #[must_use]
    pub fn path(&self) -> String {
        self.segments().join("/")
    }

    /// Whether the endpoint changes server state and needs the anti-forgery
    /// token.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::SunsetTime(_))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A page the browser is sent to after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    CreateAccountForm,
    LoginForm,
}

impl Destination {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/yahrzeit/dashboard",
            Self::CreateAccountForm => "/yahrzeit/create-account-form",
            Self::LoginForm => "/yahrzeit/login-form",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
