//! Password strength policy for new accounts.

use thiserror::Error;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols that satisfy the "special character" requirement.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}\\|;:'\",<.>/?~`";

/// The first requirement a password fails to meet.
///
/// Requirements are checked in declaration order, so a password missing
/// several character classes reports the earliest one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    /// No ASCII uppercase letter.
    #[error("password must contain an uppercase letter")]
    MissingUppercase,
    /// No ASCII lowercase letter.
    #[error("password must contain a lowercase letter")]
    MissingLowercase,
    /// No ASCII digit.
    #[error("password must contain a digit")]
    MissingDigit,
    /// No character from [`PASSWORD_SYMBOLS`].
    #[error("password must contain a symbol")]
    MissingSymbol,
    /// Fewer than [`MIN_PASSWORD_LENGTH`] characters.
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
    },
}

/// Check a password against the account policy.
///
/// A valid password contains an uppercase letter, a lowercase letter, a
/// digit and one of [`PASSWORD_SYMBOLS`], and is at least
/// [`MIN_PASSWORD_LENGTH`] characters long.
///
/// ```
/// use yahrzeit_core::validate_password;
///
/// assert!(validate_password("Abcdef1!").is_ok());
/// assert!(validate_password("abcdef1!").is_err());
/// ```
///
/// # Errors
///
/// Returns the first unmet requirement.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    if !password.chars().any(is_password_symbol) {
        return Err(PasswordError::MissingSymbol);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

fn is_password_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(c)
}
