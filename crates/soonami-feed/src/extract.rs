//! Response body -> [`Event`].
//!
//! Only `features[0].properties` is ever deserialized into typed fields.
//! Later features are left as untyped JSON, so their contents cannot change
//! the result.

use serde::Deserialize;
use serde_json::Value;
use soonami_core::Event;

use crate::error::FeedError;

#[derive(Deserialize)]
struct Feature {
    properties: Properties,
}

#[derive(Deserialize)]
struct Properties {
    title: String,
    time: i64,
    tsunami: i64,
}

/// Extract the first earthquake from a GeoJSON response body.
///
/// Returns `Ok(None)` when the `features` array is present but empty.
///
/// # Errors
///
/// - [`FeedError::EmptyBody`] if `text` is empty or whitespace.
/// - [`FeedError::Json`] if `text` is not valid JSON.
/// - [`FeedError::Shape`] if `features` is missing or not an array, or the
///   first feature lacks a correctly typed `title`, `time` or `tsunami`.
pub fn try_extract_event(text: &str) -> Result<Option<Event>, FeedError> {
    if text.trim().is_empty() {
        return Err(FeedError::EmptyBody);
    }

    let root: Value = serde_json::from_str(text)?;
    let features = root
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| FeedError::Shape("missing `features` array".to_string()))?;

    let Some(first) = features.first() else {
        return Ok(None);
    };

    let feature = Feature::deserialize(first)
        .map_err(|e| FeedError::Shape(format!("features[0]: {e}")))?;
    let Properties {
        title,
        time,
        tsunami,
    } = feature.properties;

    Ok(Some(Event::new(title, time, tsunami)))
}

/// Fail-soft form of [`try_extract_event`]: any failure yields `None`.
#[must_use]
pub fn extract_event(text: &str) -> Option<Event> {
    match try_extract_event(text) {
        Ok(event) => event,
        Err(error) => {
            tracing::warn!(%error, "problem parsing the earthquake JSON results");
            None
        }
    }
}
