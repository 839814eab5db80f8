//! The single screen: three text regions, written at most once.

use soonami_config::{AlertLabels, DisplayConfig};
use soonami_core::Event;

use crate::presenter::EventView;

#[derive(Debug, Clone, Default)]
pub struct Screen {
    display: DisplayConfig,
    labels: AlertLabels,
    view: Option<EventView>,
}

impl Screen {
    /// An empty screen: all three regions blank.
    #[must_use]
    pub const fn new(display: DisplayConfig, labels: AlertLabels) -> Self {
        Self {
            display,
            labels,
            view: None,
        }
    }

    /// Apply the launch result.
    ///
    /// `Some` fills all three regions and returns `true`. `None` leaves the
    /// screen as it was. Once filled, further calls are ignored.
    pub fn apply(&mut self, event: Option<Event>) -> bool {
        let Some(event) = event else {
            tracing::debug!("no earthquake to show; screen left unchanged");
            return false;
        };
        if self.view.is_some() {
            tracing::debug!("screen already updated; ignoring second result");
            return false;
        }

        self.view = Some(EventView::render(&event, &self.display, &self.labels));
        true
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.view.is_none()
    }

    #[must_use]
    pub const fn view(&self) -> Option<&EventView> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.view.as_ref().map(|v| v.title.as_str())
    }

    #[must_use]
    pub fn date(&self) -> Option<&str> {
        self.view.as_ref().map(|v| v.date.as_str())
    }

    #[must_use]
    pub fn tsunami_alert(&self) -> Option<&str> {
        self.view.as_ref().map(|v| v.tsunami_alert.as_str())
    }
}
