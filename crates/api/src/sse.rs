use axum::response::sse::{Event, KeepAlive, Sse};
use brandwatch_application::ports::EventNotifier;
use brandwatch_domain::DashboardEvent;
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, info, warn};

/// Fans dashboard events out to every connected SSE subscriber.
#[derive(Clone)]
pub struct EventBroadcaster {
    tx: broadcast::Sender<DashboardEvent>,
    keep_alive: Duration,
}

impl EventBroadcaster {
    pub fn new(capacity: usize, keep_alive: Duration) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        info!(capacity, "Event broadcaster initialized");
        Self { tx, keep_alive }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.tx.subscribe()
    }

    pub fn subscribe_stream(&self) -> impl Stream<Item = Result<Event, Infallible>> {
        BroadcastStream::new(self.tx.subscribe()).filter_map(|result| async move {
            match result {
                Ok(event) => Event::default()
                    .event(event.name())
                    .json_data(&event)
                    .ok()
                    .map(Ok),
                Err(e) => {
                    warn!(error = %e, "SSE subscriber lagging, events dropped");
                    None
                }
            }
        })
    }

    pub fn sse_response(&self) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
        info!(subscribers = self.subscriber_count() + 1, "SSE subscriber connected");

        Sse::new(self.subscribe_stream()).keep_alive(KeepAlive::new().interval(self.keep_alive))
    }
}

impl EventNotifier for EventBroadcaster {
    fn publish(&self, event: DashboardEvent) {
        match self.tx.send(event) {
            Ok(count) => debug!(subscribers = count, "Event published"),
            Err(_) => debug!("Event dropped, no subscribers"),
        }
    }
}
