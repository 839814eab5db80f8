//! Feed error types.

use thiserror::Error;

/// Everything that can stop the feed from producing an [`Event`].
///
/// At the application boundary all variants collapse to "no event"; they
/// exist so the cause can be logged and asserted on in tests.
///
/// [`Event`]: soonami_core::Event
#[derive(Debug, Error)]
pub enum FeedError {
    /// The endpoint string is not a valid URL.
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL as written.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// HTTP transport error (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with anything other than 200 OK.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Leading part of the response body.
        message: String,
    },

    /// The response body was empty or whitespace only.
    #[error("empty response body")]
    EmptyBody,

    /// The response body is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but not the expected `features[0].properties` shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),
}
