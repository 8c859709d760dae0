//! Transport for [`ApiRequest`]s.
//!
//! Handlers are generic over [`YahrzeitApi`] so they can run against the real
//! server through [`ApiClient`] or against an in-memory fake in tests.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;
use yahrzeit_core::Endpoint;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::request::ApiRequest;

/// Longest slice of a response body copied into logs and errors.
const MAX_LOGGED_BODY: usize = 500;

/// Sends a request and decodes the JSON response.
pub trait YahrzeitApi {
    /// Send `request` and parse the response body as `T`.
    fn send<T: DeserializeOwned + Send>(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<T>> + Send;
}

impl<A: YahrzeitApi + Sync + ?Sized> YahrzeitApi for &A {
    fn send<T: DeserializeOwned + Send>(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<T>> + Send {
        (**self).send(request)
    }
}

/// HTTP client for the Yahrzeit server.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Absolute URL of an endpoint.
    ///
    /// Each segment is percent-encoded, so an address containing `/` or `?`
    /// stays a single path segment.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if the base URL cannot take path
    /// segments.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ClientError::InvalidBaseUrl(self.inner.base_url.to_string()))?;
            segments.pop_if_empty().extend(endpoint.segments());
        }
        Ok(url)
    }
}

impl YahrzeitApi for ApiClient {
    #[instrument(skip_all, fields(method = %request.method, path = %request.endpoint))]
    async fn send<T: DeserializeOwned + Send>(&self, request: &ApiRequest) -> Result<T> {
        let url = self.url_for(&request.endpoint)?;

        let mut builder = self.inner.client.request(request.method.clone(), url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await.inspect_err(|e| {
            tracing::error!(error = %e, "Request failed");
        })?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate(&response_text),
                "Server returned non-success status"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: truncate(&response_text),
            });
        }

        debug!(status = %status, "Response received");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %truncate(&response_text),
                "Failed to parse response"
            );
            ClientError::Parse(e)
        })
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_LOGGED_BODY).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use yahrzeit_core::SunsetQuery;

    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::for_base_url(base).unwrap()).unwrap()
    }

    #[test]
    fn test_url_for_joins_under_base() {
        let client = client("http://localhost:8000/yahrzeit/");
        let url = client.url_for(&Endpoint::CreateAccount).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/yahrzeit/api/create-account");
    }

    #[test]
    fn test_url_for_root_base() {
        let client = client("http://localhost:8000");
        let url = client.url_for(&Endpoint::SaveResult).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/save-res");
    }

    #[test]
    fn test_url_for_encodes_address() {
        let client = client("http://localhost:8000/yahrzeit/");
        let url = client
            .url_for(&Endpoint::SunsetTime(SunsetQuery {
                date: "2024-03-01".to_string(),
                location_text: "Tel Aviv, Israel".to_string(),
            }))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/yahrzeit/api/get-sunset-time/2024-03-01/Tel%20Aviv,%20Israel"
        );
    }

    #[test]
    fn test_url_for_keeps_slash_inside_segment() {
        let client = client("http://localhost:8000/yahrzeit/");
        let url = client
            .url_for(&Endpoint::SunsetTime(SunsetQuery {
                date: "2024-03-01".to_string(),
                location_text: "Unit 4/12 Main St?".to_string(),
            }))
            .unwrap();
        assert!(url.query().is_none());
        assert_eq!(url.path_segments().unwrap().count(), 5);
    }

    #[test]
    fn test_truncate() {
        let long = "x".repeat(MAX_LOGGED_BODY + 10);
        assert_eq!(truncate(&long).len(), MAX_LOGGED_BODY);
        assert_eq!(truncate("short"), "short");
    }
}
