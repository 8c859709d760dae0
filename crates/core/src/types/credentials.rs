//! Account-creation form values.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::password::{PasswordError, validate_password};

/// Why a set of [`Credentials`] was rejected before reaching the server.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    /// Password and confirmation differ.
    #[error("passwords don't match")]
    Mismatch,
    /// Password fails the strength policy.
    #[error("password doesn't meet requirements")]
    WeakPassword(#[source] PasswordError),
}

/// The three inputs of the account-creation form.
///
/// Lives only for a single submit; [`Credentials::validate`] turns it into
/// the request body.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Email address, sent as typed.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Retyped password.
    pub confirmation: String,
}

impl Credentials {
    /// Build credentials from raw form values.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }

    /// Validate the form and produce the account-creation body.
    ///
    /// The confirmation check runs first, so a mismatched pair is reported
    /// as [`CredentialsError::Mismatch`] even when the password is weak.
    ///
    /// # Errors
    ///
    /// Returns the first failed check.
    pub fn validate(self) -> Result<NewAccount, CredentialsError> {
        if self.password != self.confirmation {
            return Err(CredentialsError::Mismatch);
        }
        validate_password(&self.password).map_err(CredentialsError::WeakPassword)?;

        Ok(NewAccount {
            email: self.email,
            password: self.password,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirmation", &"[REDACTED]")
            .finish()
    }
}

/// JSON body of `POST api/create-account`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    /// Email address.
    pub email: String,
    /// Validated password.
    pub password: String,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
