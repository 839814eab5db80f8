use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A single earthquake as reported by the feed.
///
/// Only ever built from a fully read response; there is no partially
/// populated `Event`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Human-readable description, e.g. `M 7.0 - offshore`.
    pub title: String,
    /// When the earthquake occurred, in milliseconds since the Unix epoch.
    pub time: i64,
    /// Raw tsunami flag as reported by the feed. See [`TsunamiAlert`].
    #[serde(rename = "tsunamiAlert")]
    pub tsunami_alert: i64,
}

impl Event {
    #[must_use]
    pub fn new(title: impl Into<String>, time: i64, tsunami_alert: i64) -> Self {
        Self {
            title: title.into(),
            time,
            tsunami_alert,
        }
    }

    /// Tri-state interpretation of the raw tsunami flag.
    #[must_use]
    pub const fn alert(&self) -> TsunamiAlert {
        TsunamiAlert::from_code(self.tsunami_alert)
    }

    /// The event time as a UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `time` falls outside the range
    /// chrono can represent.
    pub fn occurred_at(&self) -> Result<DateTime<Utc>, CoreError> {
        DateTime::from_timestamp_millis(self.time).ok_or_else(|| {
            CoreError::Validation(format!(
                "event time {} ms is out of range",
                self.time
            ))
        })
    }
}

/// Whether a tsunami alert was issued for an event.
///
/// The feed encodes this as an integer: `0` for no, `1` for yes. Any other
/// value is treated as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsunamiAlert {
    No,
    Yes,
    NotAvailable,
}

impl TsunamiAlert {
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::No,
            1 => Self::Yes,
            _ => Self::NotAvailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Weekday};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, TsunamiAlert::No)]
    #[case(1, TsunamiAlert::Yes)]
    #[case(2, TsunamiAlert::NotAvailable)]
    #[case(-1, TsunamiAlert::NotAvailable)]
    #[case(4_294_967_296, TsunamiAlert::NotAvailable)]
    #[case(i64::MIN, TsunamiAlert::NotAvailable)]
    fn tsunami_alert_from_code(#[case] code: i64, #[case] expected: TsunamiAlert) {
        assert_eq!(TsunamiAlert::from_code(code), expected);
    }

    #[test]
    fn event_alert_uses_tri_state_table() {
        assert_eq!(Event::new("a", 0, 1).alert(), TsunamiAlert::Yes);
        assert_eq!(Event::new("a", 0, 7).alert(), TsunamiAlert::NotAvailable);
    }

    #[test]
    fn occurred_at_converts_epoch_millis() {
        let event = Event::new("M 7.0 - offshore", 1_393_632_000_000, 1);
        let at = event.occurred_at().unwrap();
        assert_eq!(at.year(), 2014);
        assert_eq!(at.month(), 3);
        assert_eq!(at.day(), 1);
        assert_eq!(at.weekday(), Weekday::Sat);
        assert_eq!(at.hour(), 0);
    }

    #[test]
    fn occurred_at_rejects_out_of_range_time() {
        let event = Event::new("far future", i64::MAX, 0);
        let err = event.occurred_at().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn event_serializes_with_feed_style_alert_name() {
        let event = Event::new("M 7.0 - offshore", 1_393_632_000_000, 1);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "M 7.0 - offshore",
                "time": 1_393_632_000_000_i64,
                "tsunamiAlert": 1
            })
        );
    }
}
