use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckerConfig {
    /// WebSocket endpoint of the blocked-domain feed. The bridge is disabled when unset.
    #[serde(default)]
    pub feed_url: Option<String>,

    #[serde(default = "default_reconnect_delay_ms")]
    pub reconnect_delay_ms: u64,
    /// Upper bound on one feed connect, handshake included.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// HTTP endpoint of the synchronous bulk-check command.
    #[serde(default)]
    pub bulk_check_url: Option<String>,

    /// Credential sent to the checker; never exposed to API callers.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_status_update_chunk_size")]
    pub status_update_chunk_size: usize,

    #[serde(default = "default_max_bulk_check_urls")]
    pub max_bulk_check_urls: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            feed_url: None,
            reconnect_delay_ms: default_reconnect_delay_ms(),
            connect_timeout_secs: default_connect_timeout_secs(),
            bulk_check_url: None,
            api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            status_update_chunk_size: default_status_update_chunk_size(),
            max_bulk_check_urls: default_max_bulk_check_urls(),
        }
    }
}

fn default_reconnect_delay_ms() -> u64 {
    5000
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_status_update_chunk_size() -> usize {
    10
}

fn default_max_bulk_check_urls() -> usize {
    5
}
