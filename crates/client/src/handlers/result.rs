//! Buttons on the result page.

use tracing::{info, instrument, warn};
use yahrzeit_core::{ActionResult, ActionStatus, CsrfToken, ResultAction, ViewMode};

use crate::api::YahrzeitApi;
use crate::error::{ClientError, Result};
use crate::page::{GENERIC_FAILURE_MESSAGE, Page};
use crate::request;

/// Dispatches the result-page buttons for one view mode.
///
/// Guests get "create account" and "login", which both activate the pending
/// result before sending the user to the matching form. Signed-in users get
/// "save", which stores the result and returns to the dashboard.
pub struct ResultActionHandler<A, P> {
    api: A,
    page: P,
    csrf_token: CsrfToken,
    mode: ViewMode,
}

impl<A: YahrzeitApi, P: Page> ResultActionHandler<A, P> {
    pub const fn new(api: A, page: P, csrf_token: CsrfToken, mode: ViewMode) -> Self {
        Self {
            api,
            page,
            csrf_token,
            mode,
        }
    }

    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Buttons wired for this page.
    pub const fn actions(&self) -> &'static [ResultAction] {
        self.mode.actions()
    }

    /// Handle a button click.
    ///
    /// # Errors
    ///
    /// - `ClientError::ActionUnavailable` if the button is not wired for this
    ///   mode; nothing is sent.
    /// - `ClientError::ActionFailed` if the server answers with a status other
    ///   than `success`.
    /// - Transport and parse errors.
    ///
    /// In the last two cases the user is shown a generic notice and stays on
    /// the page.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub async fn on_click(&self, action: ResultAction) -> Result<ActionStatus> {
        if !self.mode.offers(action) {
            return Err(ClientError::ActionUnavailable {
                action,
                mode: self.mode,
            });
        }

        let request = request::result_action(action, &self.csrf_token);
        let result: ActionResult = match self.api.send(&request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Result action request failed");
                self.page.alert(GENERIC_FAILURE_MESSAGE);
                return Err(e);
            }
        };

        info!(status = %result.status, endpoint = %request.endpoint, "Result action response");

        if !result.status.is_success() {
            self.page.alert(GENERIC_FAILURE_MESSAGE);
            return Err(ClientError::ActionFailed {
                endpoint: request.path(),
                status: result.status.to_string(),
            });
        }

        self.page.navigate(action.destination().path());
        Ok(result.status)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handlers::testing::{FakeApi, RecordingPage};

    fn token() -> CsrfToken {
        CsrfToken::parse("tok").unwrap()
    }

    fn activated() -> FakeApi {
        FakeApi::default().respond("api/activate-res", json!({"status": "success"}))
    }

    #[tokio::test]
    async fn test_guest_create_account() {
        let api = activated();
        let page = RecordingPage::default();
        let handler = ResultActionHandler::new(&api, &page, token(), ViewMode::Guest);

        let status = handler.on_click(ResultAction::CreateAccount).await.unwrap();

        assert_eq!(status, ActionStatus::Success);
        assert_eq!(page.navigations(), vec!["/yahrzeit/create-account-form"]);
        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path(), "api/activate-res");
        assert_eq!(requests[0].header("X-CSRFToken"), Some("tok"));
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_guest_login() {
        let api = activated();
        let page = RecordingPage::default();
        let handler = ResultActionHandler::new(&api, &page, token(), ViewMode::Guest);

        handler.on_click(ResultAction::Login).await.unwrap();

        assert_eq!(page.navigations(), vec!["/yahrzeit/login-form"]);
        assert_eq!(api.requests()[0].path(), "api/activate-res");
    }

    #[tokio::test]
    async fn test_authenticated_save() {
        let api = FakeApi::default().respond("api/save-res", json!({"status": "success"}));
        let page = RecordingPage::default();
        let handler = ResultActionHandler::new(&api, &page, token(), ViewMode::Authenticated);

        handler.on_click(ResultAction::SaveResult).await.unwrap();

        assert_eq!(page.navigations(), vec!["/yahrzeit/dashboard"]);
        let requests = api.requests();
        assert_eq!(requests[0].path(), "api/save-res");
        assert_eq!(requests[0].header("content-type"), Some("application/json"));
        assert_eq!(requests[0].header("x-csrftoken"), Some("tok"));
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_unwired_action_sends_nothing() {
        let api = activated();
        let page = RecordingPage::default();
        let guest = ResultActionHandler::new(&api, &page, token(), ViewMode::Guest);
        let member = ResultActionHandler::new(&api, &page, token(), ViewMode::Authenticated);

        assert!(matches!(
            guest.on_click(ResultAction::SaveResult).await,
            Err(ClientError::ActionUnavailable { .. })
        ));
        assert!(matches!(
            member.on_click(ResultAction::Login).await,
            Err(ClientError::ActionUnavailable { .. })
        ));
        assert!(api.requests().is_empty());
        assert!(page.events().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_stays_on_page() {
        let api = FakeApi::default().respond("api/save-res", json!({"status": "error"}));
        let page = RecordingPage::default();
        let handler = ResultActionHandler::new(&api, &page, token(), ViewMode::Authenticated);

        let err = handler.on_click(ResultAction::SaveResult).await.unwrap_err();

        assert!(matches!(err, ClientError::ActionFailed { ref status, .. } if status == "error"));
        assert!(page.navigations().is_empty());
        assert_eq!(page.alerts(), vec![GENERIC_FAILURE_MESSAGE]);
    }

    #[tokio::test]
    async fn test_transport_failure_stays_on_page() {
        let api = FakeApi::default();
        let page = RecordingPage::default();
        let handler = ResultActionHandler::new(&api, &page, token(), ViewMode::Guest);

        assert!(handler.on_click(ResultAction::Login).await.is_err());
        assert!(page.navigations().is_empty());
        assert_eq!(page.alerts(), vec![GENERIC_FAILURE_MESSAGE]);
    }

    #[test]
    fn test_actions_follow_mode() {
        let api = FakeApi::default();
        let page = RecordingPage::default();
        let guest = ResultActionHandler::new(&api, &page, token(), ViewMode::Guest);
        assert_eq!(
            guest.actions(),
            &[ResultAction::CreateAccount, ResultAction::Login]
        );
        assert_eq!(guest.mode(), ViewMode::Guest);
    }
}
