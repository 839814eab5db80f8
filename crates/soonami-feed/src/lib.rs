//! # soonami-feed
//!
//! Fetches the USGS earthquake feed and pulls out the most significant
//! event.
//!
//! Two layers of API:
//! - `try_*` / [`FeedClient::fetch_latest`] return a [`FeedError`] so the
//!   cause of a failure can be logged or asserted on.
//! - [`FeedClient::fetch_body`], [`extract_event`] and
//!   [`FeedClient::latest_event`] swallow every failure (logging it) and
//!   surface it as an empty body or `None`.

mod error;
mod extract;
mod http;

pub use error::FeedError;
pub use extract::{extract_event, try_extract_event};
pub use http::{CONNECT_TIMEOUT, HttpTransport, READ_TIMEOUT, Transport, check_response};

use soonami_core::Event;

/// USGS query: magnitude 7+ earthquakes between January and December 2014.
pub const USGS_REQUEST_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&starttime=2014-01-01&endtime=2014-12-01&minmagnitude=7";

/// Client for the fixed USGS endpoint.
pub struct FeedClient<T = HttpTransport> {
    transport: T,
}

impl Default for FeedClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedClient<HttpTransport> {
    /// Create a client that talks to the network.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl<T: Transport> FeedClient<T> {
    /// Create a client over a caller-supplied transport.
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// GET the endpoint and return the full body.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`], [`FeedError::Http`] or
    /// [`FeedError::Api`] (any status other than 200).
    pub async fn try_fetch_body(&self) -> Result<String, FeedError> {
        let url = http::parse_endpoint(USGS_REQUEST_URL)?;
        let resp = check_response(self.transport.get(&url).await?).await?;
        Ok(resp.text().await?)
    }

    /// Fail-soft form of [`Self::try_fetch_body`]: any failure yields `""`.
    pub async fn fetch_body(&self) -> String {
        self.try_fetch_body().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "problem retrieving the earthquake JSON results");
            String::new()
        })
    }

    /// Fetch and extract, keeping the three outcomes apart:
    /// `Ok(Some)` for an event, `Ok(None)` for an empty feed, `Err` otherwise.
    ///
    /// # Errors
    ///
    /// Any [`FeedError`] from fetching or extracting.
    pub async fn fetch_latest(&self) -> Result<Option<Event>, FeedError> {
        let body = self.try_fetch_body().await?;
        try_extract_event(&body)
    }

    /// The most significant recent event, or `None` if anything went wrong.
    pub async fn latest_event(&self) -> Option<Event> {
        match self.fetch_latest().await {
            Ok(Some(event)) => {
                tracing::debug!(title = %event.title, "extracted earthquake event");
                Some(event)
            }
            Ok(None) => {
                tracing::info!("feed returned no earthquakes");
                None
            }
            Err(error) => {
                tracing::warn!(%error, "no earthquake event produced");
                None
            }
        }
    }
}
