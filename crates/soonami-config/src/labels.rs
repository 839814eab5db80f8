//! Display strings for the tsunami alert region.

use serde::{Deserialize, Serialize};

fn default_alert_no() -> String {
    "no".to_string()
}

fn default_alert_yes() -> String {
    "yes".to_string()
}

fn default_alert_not_available() -> String {
    "not available".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlertLabels {
    #[serde(default = "default_alert_no")]
    pub alert_no: String,

    #[serde(default = "default_alert_yes")]
    pub alert_yes: String,

    /// Shown for any code other than 0 or 1, and for unrepresentable dates.
    #[serde(default = "default_alert_not_available")]
    pub alert_not_available: String,
}

impl Default for AlertLabels {
    fn default() -> Self {
        Self {
            alert_no: default_alert_no(),
            alert_yes: default_alert_yes(),
            alert_not_available: default_alert_not_available(),
        }
    }
}

impl AlertLabels {
    /// Labels must be non-blank, otherwise the alert region would look empty.
    pub(crate) fn blank_field(&self) -> Option<&'static str> {
        [
            ("labels.alert_no", &self.alert_no),
            ("labels.alert_yes", &self.alert_yes),
            ("labels.alert_not_available", &self.alert_not_available),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}
