//! Account creation.
//!
//! # Usage
//!
//! ```bash
//! yahrzeit create-account -e me@example.com -p 'Abcdef1!' -c 'Abcdef1!'
//! ```
//!
//! # Environment Variables
//!
//! - `YAHRZEIT_BASE_URL` - Directory of the app's pages
//! - `YAHRZEIT_CSRF_TOKEN` or `YAHRZEIT_COOKIE` - Anti-forgery token

use yahrzeit_client::{AccountFormHandler, ApiClient, ClientConfig, SubmitOutcome};
use yahrzeit_core::Credentials;

use super::CommandError;
use crate::console::ConsolePage;

/// Validate and submit the account-creation form.
pub async fn create(
    config: &ClientConfig,
    email: String,
    password: String,
    confirmation: String,
) -> Result<(), CommandError> {
    let api = ApiClient::new(config)?;
    let handler = AccountFormHandler::new(api, ConsolePage, config.require_csrf_token()?);

    tracing::info!("Creating account for {}", email);
    match handler
        .on_submit(Credentials::new(email, password, confirmation))
        .await?
    {
        SubmitOutcome::Created => Ok(()),
        SubmitOutcome::Rejected(reason) => Err(CommandError::Refused(reason.to_string())),
        SubmitOutcome::EmailTaken => Err(CommandError::Refused(
            "email already registered".to_string(),
        )),
    }
}
