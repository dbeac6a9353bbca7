use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BroadcastConfig {
    /// Pending status changes that force an immediate batch flush.
    #[serde(default = "default_flush_threshold")]
    pub flush_threshold: usize,

    /// Quiet period after the last status change before a batch is flushed.
    #[serde(default = "default_flush_window_ms")]
    pub flush_window_ms: u64,

    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    #[serde(default = "default_keep_alive_secs")]
    pub keep_alive_secs: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            flush_threshold: default_flush_threshold(),
            flush_window_ms: default_flush_window_ms(),
            channel_capacity: default_channel_capacity(),
            keep_alive_secs: default_keep_alive_secs(),
        }
    }
}

fn default_flush_threshold() -> usize {
    50
}

fn default_flush_window_ms() -> u64 {
    2000
}

fn default_channel_capacity() -> usize {
    256
}

fn default_keep_alive_secs() -> u64 {
    30
}
