//! Integration tests for the sunset-time lookup.
//!
//! Run with: cargo test -p yahrzeit-integration-tests

use std::time::Duration;

use serde_json::json;
use yahrzeit_client::page::{
    AFTER_SUNSET_LABEL, BEFORE_SUNSET_LABEL, GENERIC_FAILURE_MESSAGE, TIME_OF_DAY_BLOCK,
};
use yahrzeit_client::{ApiClient, LookupOutcome, PlaceDateLookupHandler};
use yahrzeit_core::{LookupForm, Place};
use yahrzeit_integration_tests::{RecordingPage, StubResponse, StubServer};

const TEL_AVIV: &str = "api/get-sunset-time/2024-03-01/Tel Aviv, Israel";

fn tel_aviv() -> LookupForm {
    LookupForm::new("2024-03-01", Some(Place::from_address("Tel Aviv, Israel")))
}

#[tokio::test]
async fn test_lookup_reveals_time_of_day_choice() {
    let server = StubServer::start().await;
    server.respond_json(TEL_AVIV, json!({"sunset_time": "18:02"}));
    let page = RecordingPage::default();
    let handler = PlaceDateLookupHandler::attach(server.client(), &page);

    assert_eq!(page.is_visible(TIME_OF_DAY_BLOCK), Some(false));

    let outcome = handler.on_place_changed(&tel_aviv()).await.unwrap();

    assert!(matches!(outcome, LookupOutcome::Applied(_)));
    assert_eq!(
        page.text_of(BEFORE_SUNSET_LABEL).as_deref(),
        Some("Before 18:02")
    );
    assert_eq!(
        page.text_of(AFTER_SUNSET_LABEL).as_deref(),
        Some("After 18:02")
    );
    assert_eq!(page.is_visible(TIME_OF_DAY_BLOCK), Some(true));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, TEL_AVIV);
    assert_eq!(
        requests[0].raw_uri,
        "/yahrzeit/api/get-sunset-time/2024-03-01/Tel%20Aviv,%20Israel"
    );
}

#[tokio::test]
async fn test_address_with_slash_stays_one_segment() {
    let server = StubServer::start().await;
    server.respond_json(
        "api/get-sunset-time/2024-03-01/Unit 4/12 Herzl St, Haifa",
        json!({"sunset_time": "17:58"}),
    );
    let page = RecordingPage::default();
    let handler = PlaceDateLookupHandler::attach(server.client(), &page);

    let form = LookupForm::new(
        "2024-03-01",
        Some(Place::from_address("Unit 4/12 Herzl St, Haifa")),
    );
    let outcome = handler.on_date_changed(&form).await.unwrap();

    assert!(matches!(outcome, LookupOutcome::Applied(_)));
    assert_eq!(
        page.text_of(BEFORE_SUNSET_LABEL).as_deref(),
        Some("Before 17:58")
    );
}

#[tokio::test]
async fn test_incomplete_form_issues_no_requests() {
    let server = StubServer::start().await;
    server.respond_json(TEL_AVIV, json!({"sunset_time": "18:02"}));
    let page = RecordingPage::default();
    let handler = PlaceDateLookupHandler::attach(server.client(), &page);

    let no_date = LookupForm::new("", Some(Place::from_address("Tel Aviv, Israel")));
    let no_place = LookupForm::new("2024-03-01", None);

    for form in [&no_date, &no_place] {
        assert_eq!(
            handler.on_date_changed(form).await.unwrap(),
            LookupOutcome::Incomplete
        );
        assert_eq!(
            handler.on_place_changed(form).await.unwrap(),
            LookupOutcome::Incomplete
        );
    }

    assert!(server.requests().is_empty());
    assert_eq!(page.is_visible(TIME_OF_DAY_BLOCK), Some(false));
}

#[tokio::test]
async fn test_older_lookup_cannot_overwrite_newer() {
    let server = StubServer::start().await;
    server.respond(
        TEL_AVIV,
        StubResponse::Delayed(Duration::from_millis(200), json!({"sunset_time": "18:02"})),
    );
    server.respond_json(
        "api/get-sunset-time/2024-03-02/Tel Aviv, Israel",
        json!({"sunset_time": "18:03"}),
    );
    let page = RecordingPage::default();
    let handler = PlaceDateLookupHandler::attach(server.client(), &page);

    let first_day = tel_aviv();
    let slow = handler.on_date_changed(&first_day);
    let fast = async {
        // Let the slow lookup go out first
        tokio::time::sleep(Duration::from_millis(50)).await;
        let next_day = LookupForm::new("2024-03-02", Some(Place::from_address("Tel Aviv, Israel")));
        handler.on_date_changed(&next_day).await
    };
    let (slow, fast) = tokio::join!(slow, fast);

    assert_eq!(slow.unwrap(), LookupOutcome::Superseded);
    assert!(matches!(fast.unwrap(), LookupOutcome::Applied(_)));
    assert_eq!(
        page.text_of(BEFORE_SUNSET_LABEL).as_deref(),
        Some("Before 18:03")
    );
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn test_timeout_shows_generic_notice() {
    let server = StubServer::start().await;
    server.respond(
        TEL_AVIV,
        StubResponse::Delayed(Duration::from_secs(5), json!({"sunset_time": "18:02"})),
    );
    let mut config = server.config();
    config.request_timeout = Duration::from_millis(100);
    let page = RecordingPage::default();
    let handler = PlaceDateLookupHandler::attach(ApiClient::new(&config).unwrap(), &page);

    assert!(handler.on_place_changed(&tel_aviv()).await.is_err());
    assert_eq!(page.alerts(), vec![GENERIC_FAILURE_MESSAGE]);
    assert_eq!(page.is_visible(TIME_OF_DAY_BLOCK), Some(false));
}
