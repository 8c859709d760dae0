//! Result-page buttons.
//!
//! # Usage
//!
//! ```bash
//! # Guest: keep the result and go log in
//! yahrzeit result -m guest -a login
//!
//! # Signed in: save the result
//! yahrzeit result -m authenticated -a save
//! ```

use yahrzeit_client::{ApiClient, ClientConfig, ResultActionHandler};
use yahrzeit_core::{ResultAction, ViewMode};

use super::CommandError;
use crate::console::ConsolePage;

/// Click one result-page button.
pub async fn click(
    config: &ClientConfig,
    mode: ViewMode,
    action: ResultAction,
) -> Result<(), CommandError> {
    let api = ApiClient::new(config)?;
    let handler = ResultActionHandler::new(api, ConsolePage, config.require_csrf_token()?, mode);

    let status = handler.on_click(action).await?;
    tracing::info!("{} finished with status {}", action, status);
    Ok(())
}
