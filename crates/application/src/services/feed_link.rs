use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Disconnected,
    Connecting,
    Connected,
}

/// Connection state of the upstream feed, independent of any socket.
///
/// Guards the two invariants of the bridge: at most one connection attempt
/// or live connection exists, and at most one reconnect is pending. After
/// `shutdown` no transition leads back to `Connecting`.
#[derive(Debug)]
pub struct FeedLink {
    state: LinkState,
    reconnect_pending: bool,
    shut_down: bool,
    reconnect_delay: Duration,
}

impl FeedLink {
    pub fn new(reconnect_delay: Duration) -> Self {
        Self {
            state: LinkState::Disconnected,
            reconnect_pending: false,
            shut_down: false,
            reconnect_delay,
        }
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn reconnect_pending(&self) -> bool {
        self.reconnect_pending
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Returns true if the caller should open a connection now.
    ///
    /// Re-entrant calls while connecting or connected are no-ops.
    pub fn begin_connect(&mut self) -> bool {
        if self.shut_down || self.state != LinkState::Disconnected {
            return false;
        }
        self.state = LinkState::Connecting;
        true
    }

    pub fn on_connected(&mut self) {
        if self.state == LinkState::Connecting {
            self.state = LinkState::Connected;
            self.reconnect_pending = false;
        }
    }

    /// Handles a failed attempt or a dropped connection.
    ///
    /// Returns the delay after which a reconnect should be attempted, or
    /// `None` when a reconnect is already scheduled or the link was shut down.
    pub fn on_disconnected(&mut self) -> Option<Duration> {
        self.state = LinkState::Disconnected;
        if self.shut_down || self.reconnect_pending {
            return None;
        }
        self.reconnect_pending = true;
        debug!(delay_ms = self.reconnect_delay.as_millis() as u64, "Reconnect scheduled");
        Some(self.reconnect_delay)
    }

    /// Called when the reconnect delay has elapsed. Returns true if a connect should start.
    pub fn on_reconnect_due(&mut self) -> bool {
        if !self.reconnect_pending {
            return false;
        }
        self.reconnect_pending = false;
        self.begin_connect()
    }

    /// Intentional stop: cancels any pending reconnect and forbids new attempts.
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.reconnect_pending = false;
        self.state = LinkState::Disconnected;
    }
}
