//! HTTP plumbing for the feed client.
//!
//! [`Transport`] is the seam between the client and the network: the
//! production [`HttpTransport`] wraps a `reqwest::Client`, tests hand in
//! canned responses. Status handling lives in [`check_response`] so every
//! transport gets the same "200 or nothing" rule.

use std::future::Future;
use std::time::Duration;

use reqwest::{StatusCode, Url};

use crate::error::FeedError;

/// Time allowed to establish the connection.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Time allowed between reads once connected.
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest slice of an error body kept in [`FeedError::Api`].
const ERROR_BODY_LIMIT: usize = 200;

/// Issues a single GET and hands back the raw response.
pub trait Transport: Send + Sync {
    /// Send a GET request to `url`.
    fn get(&self, url: &Url) -> impl Future<Output = Result<reqwest::Response, FeedError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn get(&self, url: &Url) -> impl Future<Output = Result<reqwest::Response, FeedError>> + Send {
        (**self).get(url)
    }
}

/// Network transport backed by `reqwest`.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Create a transport with the feed's connect and read timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("soonami/", env!("CARGO_PKG_VERSION")))
                .connect_timeout(CONNECT_TIMEOUT)
                .read_timeout(READ_TIMEOUT)
                .build()
                .expect("reqwest client should build"),
        }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<reqwest::Response, FeedError> {
        Ok(self.http.get(url.clone()).send().await?)
    }
}

/// Parse the endpoint string, mapping failures to [`FeedError::InvalidUrl`].
pub fn parse_endpoint(raw: &str) -> Result<Url, FeedError> {
    Url::parse(raw).map_err(|e| FeedError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Accept only `200 OK`; anything else becomes [`FeedError::Api`].
///
/// The response is consumed on the error path, which releases the
/// connection.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, FeedError> {
    if resp.status() == StatusCode::OK {
        return Ok(resp);
    }

    let status = resp.status().as_u16();
    let mut message = resp.text().await.unwrap_or_default();
    if message.len() > ERROR_BODY_LIMIT {
        let cut = (0..=ERROR_BODY_LIMIT)
            .rev()
            .find(|&i| message.is_char_boundary(i))
            .unwrap_or(0);
        message.truncate(cut);
    }
    Err(FeedError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response<B: Into<reqwest::Body>>(status: u16, body: B) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn parse_endpoint_accepts_usgs_url() {
        let url = parse_endpoint(crate::USGS_REQUEST_URL).unwrap();
        assert_eq!(url.host_str(), Some("earthquake.usgs.gov"));
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn parse_endpoint_rejects_garbage() {
        let err = parse_endpoint("not a url").unwrap_err();
        assert!(matches!(err, FeedError::InvalidUrl { ref url, .. } if url == "not a url"));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(500, "boom");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            FeedError::Api { status: 500, ref message } if message == "boom"
        ));
    }

    #[tokio::test]
    async fn check_response_rejects_other_success_codes() {
        let resp = mock_response(204, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, FeedError::Api { status: 204, .. }));
    }

    #[tokio::test]
    async fn check_response_truncates_long_bodies() {
        let err = check_response(mock_response(503, "x".repeat(1000)))
            .await
            .unwrap_err();
        match err {
            FeedError::Api { message, .. } => assert_eq!(message.len(), ERROR_BODY_LIMIT),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
