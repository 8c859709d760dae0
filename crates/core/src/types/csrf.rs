//! Anti-forgery token echoed on mutating requests.

use core::fmt;

use thiserror::Error;

/// Cookie the server stores the token in.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the token is echoed back in.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Errors that can occur when parsing a [`CsrfToken`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsrfTokenError {
    /// The token is empty or whitespace.
    #[error("csrf token cannot be empty")]
    Empty,
    /// The token contains characters not allowed in a header value.
    #[error("csrf token contains invalid characters")]
    InvalidCharacters,
    /// The cookie header has no `csrftoken` entry.
    #[error("no {CSRF_COOKIE_NAME} cookie present")]
    MissingCookie,
}

/// Anti-forgery token.
///
/// `Debug` never prints the value.
///
/// ```
/// use yahrzeit_core::CsrfToken;
///
/// let token = CsrfToken::from_cookie_header("sessionid=abc; csrftoken=XyZ123").unwrap();
/// assert_eq!(token.as_str(), "XyZ123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Parse a token value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is blank or holds characters that cannot
    /// appear in an HTTP header (control characters, non-ASCII, `;`).
    pub fn parse(value: &str) -> Result<Self, CsrfTokenError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CsrfTokenError::Empty);
        }
        if !value.chars().all(|c| c.is_ascii_graphic() && c != ';') {
            return Err(CsrfTokenError::InvalidCharacters);
        }
        Ok(Self(value.to_owned()))
    }

    /// Extract the token from a `Cookie` header such as `a=1; csrftoken=xyz`.
    ///
    /// # Errors
    ///
    /// Returns [`CsrfTokenError::MissingCookie`] if no `csrftoken` pair is
    /// present, or a parse error if its value is invalid.
    pub fn from_cookie_header(header: &str) -> Result<Self, CsrfTokenError> {
        let value = header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| name.trim() == CSRF_COOKIE_NAME)
            .map(|(_, value)| value)
            .ok_or(CsrfTokenError::MissingCookie)?;
        Self::parse(value)
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken([REDACTED])")
    }
}

impl std::str::FromStr for CsrfToken {
    type Err = CsrfTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
