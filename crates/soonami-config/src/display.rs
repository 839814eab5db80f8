//! How the event is rendered on screen.

use serde::{Deserialize, Serialize};

/// Time zone used when formatting the event timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneChoice {
    #[default]
    Local,
    Utc,
}

/// Shape of the terminal output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Zone for the date region (`local` or `utc`).
    #[serde(default)]
    pub timezone: TimeZoneChoice,

    /// Output shape (`text` or `json`).
    #[serde(default)]
    pub format: DisplayFormat,
}
