//! Turns an [`Event`] into the three strings shown on screen.

use std::fmt::Display;

use chrono::{Local, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use soonami_config::{AlertLabels, DisplayConfig, TimeZoneChoice};
use soonami_core::{CoreError, Event, TsunamiAlert};

/// `Sat, 1 Mar 2014 at 00:00:00 UTC`
pub const DATE_PATTERN: &str = "%a, %-d %b %Y at %H:%M:%S %Z";

/// Format the event's epoch milliseconds in `tz` using [`DATE_PATTERN`].
///
/// # Errors
///
/// Returns [`CoreError::Validation`] if the event time is not a
/// representable instant.
pub fn format_event_time<Tz>(event: &Event, tz: &Tz) -> Result<String, CoreError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let at = event.occurred_at()?;
    Ok(at.with_timezone(tz).format(DATE_PATTERN).to_string())
}

/// Parse an IANA zone name such as `Asia/Tokyo`. A leading `:` (as allowed
/// in `TZ`) is ignored.
#[must_use]
pub fn zone_from_name(name: &str) -> Option<Tz> {
    let name = name.trim().trim_start_matches(':');
    if name.is_empty() {
        return None;
    }
    name.parse::<Tz>().ok()
}

/// The host's named time zone: `TZ` if it names an IANA zone, otherwise
/// whatever the platform reports.
#[must_use]
pub fn local_zone() -> Option<Tz> {
    if let Some(tz) = std::env::var("TZ").ok().as_deref().and_then(zone_from_name) {
        return Some(tz);
    }
    match iana_time_zone::get_timezone() {
        Ok(name) => {
            let tz = zone_from_name(&name);
            if tz.is_none() {
                tracing::debug!(zone = %name, "unknown system time zone");
            }
            tz
        }
        Err(error) => {
            tracing::debug!(%error, "cannot resolve system time zone");
            None
        }
    }
}

/// Display string for the tri-state alert.
#[must_use]
pub fn alert_label(alert: TsunamiAlert, labels: &AlertLabels) -> &str {
    match alert {
        TsunamiAlert::No => &labels.alert_no,
        TsunamiAlert::Yes => &labels.alert_yes,
        TsunamiAlert::NotAvailable => &labels.alert_not_available,
    }
}

/// The rendered contents of the three display regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    pub title: String,
    pub date: String,
    pub tsunami_alert: String,
}

impl EventView {
    #[must_use]
    pub fn render(event: &Event, display: &DisplayConfig, labels: &AlertLabels) -> Self {
        let date = match display.timezone {
            // Numeric offset only when the zone has no IANA name.
            TimeZoneChoice::Local => match local_zone() {
                Some(tz) => format_event_time(event, &tz),
                None => format_event_time(event, &Local),
            },
            TimeZoneChoice::Utc => format_event_time(event, &Utc),
        }
        .unwrap_or_else(|error| {
            tracing::warn!(%error, "cannot format earthquake time");
            labels.alert_not_available.clone()
        });

        Self {
            title: event.title.clone(),
            date,
            tsunami_alert: alert_label(event.alert(), labels).to_string(),
        }
    }
}
