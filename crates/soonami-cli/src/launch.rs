//! Background fetch with a one-shot handoff to the screen owner.
//!
//! [`launch`] spawns one worker that fetches and extracts, then sends its
//! single result over a oneshot channel. The receiving side lives in
//! [`PendingEvent`]. Dropping it (the screen went away first) makes the
//! worker's send fail, which the worker treats as a no-op.

use soonami_core::Event;
use soonami_feed::{FeedClient, Transport};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::screen::Screen;

/// Result of a launch that has not been delivered yet.
#[derive(Debug)]
pub struct PendingEvent {
    rx: oneshot::Receiver<Option<Event>>,
    worker: JoinHandle<()>,
}

/// Start the background fetch. Must be called inside a tokio runtime.
pub fn launch<T>(client: FeedClient<T>) -> PendingEvent
where
    T: Transport + 'static,
{
    let (tx, rx) = oneshot::channel();
    tracing::info!("fetching latest earthquake in the background");

    let worker = tokio::spawn(async move {
        let event = client.latest_event().await;
        if tx.send(event).is_err() {
            tracing::debug!("screen closed before the feed returned; result discarded");
        }
    });

    PendingEvent { rx, worker }
}

impl PendingEvent {
    /// Wait for the worker's result.
    ///
    /// A worker that ended without sending (it panicked) counts as no event.
    pub async fn recv(self) -> Option<Event> {
        self.rx.await.unwrap_or_else(|_| {
            tracing::warn!("feed worker ended without a result");
            None
        })
    }

    /// Wait for the result and apply it to `screen`.
    ///
    /// Returns `true` if the screen was updated.
    pub async fn deliver_to(self, screen: &mut Screen) -> bool {
        let event = self.recv().await;
        screen.apply(event)
    }

    /// Give up on the result, as when the screen is torn down early.
    ///
    /// The in-flight request is not cancelled. The returned handle resolves
    /// once the worker has finished and discarded its result.
    #[must_use]
    pub fn abandon(self) -> JoinHandle<()> {
        drop(self.rx);
        self.worker
    }
}
