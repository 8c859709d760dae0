//! Account-creation form.

use tracing::{info, instrument, warn};
use yahrzeit_core::{ActionResult, Credentials, CredentialsError, CsrfToken, Destination};

use crate::api::YahrzeitApi;
use crate::error::Result;
use crate::page::{EMAIL_TAKEN_MESSAGE, GENERIC_FAILURE_MESSAGE, Page};
use crate::request;

/// What happened to a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent.
    Rejected(CredentialsError),
    /// Account created and the page was sent to the dashboard.
    Created,
    /// Server refused the account; the email is assumed to be taken.
    EmailTaken,
}

/// Validates and submits the account-creation form.
///
/// Submitting never falls through to the default form post: every submit
/// goes through [`AccountFormHandler::on_submit`].
pub struct AccountFormHandler<A, P> {
    api: A,
    page: P,
    csrf_token: CsrfToken,
}

impl<A: YahrzeitApi, P: Page> AccountFormHandler<A, P> {
    pub const fn new(api: A, page: P, csrf_token: CsrfToken) -> Self {
        Self {
            api,
            page,
            csrf_token,
        }
    }

    /// Handle a form submission.
    ///
    /// Validation failures alert the user and send nothing. A `success`
    /// status navigates to the dashboard; any other status alerts that the
    /// email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is not JSON.
    /// The user is shown a generic notice and may submit again.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn on_submit(&self, credentials: Credentials) -> Result<SubmitOutcome> {
        let account = match credentials.validate() {
            Ok(account) => account,
            Err(reason) => {
                info!(reason = %reason, "Account form rejected");
                self.page.alert(&reason.to_string());
                return Ok(SubmitOutcome::Rejected(reason));
            }
        };

        let request = request::create_account(&account, &self.csrf_token)?;
        let result: ActionResult = match self.api.send(&request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Account creation request failed");
                self.page.alert(GENERIC_FAILURE_MESSAGE);
                return Err(e);
            }
        };

        if result.status.is_success() {
            info!("Account created");
            self.page.navigate(Destination::Dashboard.path());
            Ok(SubmitOutcome::Created)
        } else {
            info!(status = %result.status, "Account creation refused");
            self.page.alert(EMAIL_TAKEN_MESSAGE);
            Ok(SubmitOutcome::EmailTaken)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use yahrzeit_core::PasswordError;

    use super::*;
    use crate::error::ClientError;
    use crate::handlers::testing::{FakeApi, RecordingPage};

    fn token() -> CsrfToken {
        CsrfToken::parse("tok").unwrap()
    }

    #[tokio::test]
    async fn test_success_navigates_to_dashboard() {
        let api = FakeApi::default().respond("api/create-account", json!({"status": "success"}));
        let page = RecordingPage::default();
        let handler = AccountFormHandler::new(&api, &page, token());

        let outcome = handler
            .on_submit(Credentials::new("a@b.com", "Abcdef1!", "Abcdef1!"))
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(page.navigations(), vec!["/yahrzeit/dashboard"]);
        assert!(page.alerts().is_empty());

        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header("X-CSRFToken"), Some("tok"));
        assert_eq!(
            requests[0].body,
            Some(json!({"email": "a@b.com", "password": "Abcdef1!"}))
        );
    }

    #[tokio::test]
    async fn test_other_status_alerts_email_taken() {
        let api = FakeApi::default().respond("api/create-account", json!({"status": "exists"}));
        let page = RecordingPage::default();
        let handler = AccountFormHandler::new(&api, &page, token());

        let outcome = handler
            .on_submit(Credentials::new("a@b.com", "Abcdef1!", "Abcdef1!"))
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::EmailTaken);
        assert!(page.navigations().is_empty());
        assert_eq!(page.alerts(), vec![EMAIL_TAKEN_MESSAGE]);
    }

    #[tokio::test]
    async fn test_mismatch_sends_nothing() {
        let api = FakeApi::default();
        let page = RecordingPage::default();
        let handler = AccountFormHandler::new(&api, &page, token());

        let outcome = handler
            .on_submit(Credentials::new("a@b.com", "Abcdef1!", "Abcdef2!"))
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected(CredentialsError::Mismatch));
        assert_eq!(page.alerts(), vec!["passwords don't match"]);
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_weak_passwords_send_nothing() {
        let weak = ["abcdef1!", "ABCDEF1!", "Abcdefg!", "Abcdefg1", "Abc1!"];
        let api = FakeApi::default();
        let page = RecordingPage::default();
        let handler = AccountFormHandler::new(&api, &page, token());

        for password in weak {
            let outcome = handler
                .on_submit(Credentials::new("a@b.com", password, password))
                .await
                .unwrap();
            assert!(
                matches!(outcome, SubmitOutcome::Rejected(CredentialsError::WeakPassword(_))),
                "{password} should be rejected"
            );
        }

        assert!(api.requests().is_empty());
        assert_eq!(page.alerts().len(), weak.len());
        assert!(
            page.alerts()
                .iter()
                .all(|a| a == "password doesn't meet requirements")
        );
    }

    #[tokio::test]
    async fn test_short_password_reason() {
        let api = FakeApi::default();
        let page = RecordingPage::default();
        let handler = AccountFormHandler::new(&api, &page, token());

        let outcome = handler
            .on_submit(Credentials::new("a@b.com", "Ab1!", "Ab1!"))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(CredentialsError::WeakPassword(PasswordError::TooShort {
                min: 8
            }))
        );
    }

    #[tokio::test]
    async fn test_transport_failure_shows_generic_notice() {
        // No canned response: the fake answers 404
        let api = FakeApi::default();
        let page = RecordingPage::default();
        let handler = AccountFormHandler::new(&api, &page, token());

        let err = handler
            .on_submit(Credentials::new("a@b.com", "Abcdef1!", "Abcdef1!"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Api { status: 404, .. }));
        assert_eq!(page.alerts(), vec![GENERIC_FAILURE_MESSAGE]);
        assert!(page.navigations().is_empty());
    }

    #[tokio::test]
    async fn test_response_without_status_is_a_parse_error() {
        let api = FakeApi::default().respond("api/create-account", json!({"ok": true}));
        let page = RecordingPage::default();
        let handler = AccountFormHandler::new(&api, &page, token());

        let err = handler
            .on_submit(Credentials::new("a@b.com", "Abcdef1!", "Abcdef1!"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Parse(_)));
        assert_eq!(page.alerts(), vec![GENERIC_FAILURE_MESSAGE]);
    }
}
