use brandwatch_application::ports::{FeedConnection, FeedTransport};
use brandwatch_application::services::{FeedLink, LinkState};
use brandwatch_application::use_cases::{ApplyFeedEventUseCase, FeedOutcome};
use brandwatch_domain::DomainError;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

enum SessionEnd {
    Dropped,
    Cancelled,
}

/// Keeps one live subscription to the checker's blocked-domain feed and
/// routes every message into the status updater.
pub struct CheckerFeedJob {
    transport: Arc<dyn FeedTransport>,
    apply_event: Arc<ApplyFeedEventUseCase>,
    link: Mutex<FeedLink>,
    shutdown: CancellationToken,
}

impl CheckerFeedJob {
    pub fn new(
        transport: Arc<dyn FeedTransport>,
        apply_event: Arc<ApplyFeedEventUseCase>,
        reconnect_delay: Duration,
    ) -> Self {
        Self {
            transport,
            apply_event,
            link: Mutex::new(FeedLink::new(reconnect_delay)),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn link_state(&self) -> LinkState {
        self.link().state()
    }

    fn link(&self) -> MutexGuard<'_, FeedLink> {
        self.link.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub async fn start(self: Arc<Self>) {
        info!("Starting checker feed bridge");

        tokio::spawn(async move {
            self.run().await;
        });
    }

    async fn run(&self) {
        if !self.link().begin_connect() {
            return;
        }

        loop {
            let attempt = tokio::select! {
                _ = self.shutdown.cancelled() => break,
                result = self.transport.connect() => result,
            };

            match attempt {
                Ok(mut connection) => {
                    self.link().on_connected();
                    info!("Checker feed connected");

                    let end = self.pump(connection.as_mut()).await;
                    connection.close().await;
                    if let SessionEnd::Cancelled = end {
                        break;
                    }
                    warn!("Checker feed connection lost");
                }
                Err(e) => {
                    warn!(error = %e, "Checker feed connection attempt failed");
                }
            }

            let Some(delay) = self.link().on_disconnected() else {
                break;
            };

            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }

            if !self.link().on_reconnect_due() {
                break;
            }
        }

        self.link().shutdown();
        info!("CheckerFeedJob: shutting down");
    }

    async fn pump(&self, connection: &mut dyn FeedConnection) -> SessionEnd {
        loop {
            let next = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => return SessionEnd::Cancelled,
                next = connection.next_message() => next,
            };

            match next {
                Ok(Some(raw)) => self.dispatch(&raw).await,
                Ok(None) => {
                    debug!("Checker feed closed by peer");
                    return SessionEnd::Dropped;
                }
                Err(e) => {
                    warn!(error = %e, "Checker feed read failed");
                    return SessionEnd::Dropped;
                }
            }
        }
    }

    async fn dispatch(&self, raw: &str) {
        match self.apply_event.execute(raw).await {
            Ok(FeedOutcome::Applied(change)) => {
                debug!(domain = %change.domain, "Feed event applied");
            }
            Ok(FeedOutcome::Ignored) | Ok(FeedOutcome::UnknownDomain(_)) => {}
            Err(DomainError::UpstreamProtocolFault(reason)) => {
                warn!(reason = %reason, "Dropping malformed feed message");
            }
            Err(e) => {
                error!(error = %e, "Failed to apply feed event");
            }
        }
    }
}
