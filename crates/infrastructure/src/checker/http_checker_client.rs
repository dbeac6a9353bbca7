use async_trait::async_trait;
use brandwatch_application::ports::CheckerClient;
use brandwatch_domain::DomainError;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BulkCheckRequest<'a> {
    api_key: &'a str,
    urls: &'a [String],
    mode: &'a str,
}

/// Bulk-check command client for the external checking system.
pub struct HttpCheckerClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpCheckerClient {
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent("Brandwatch/1.0 (bulk-check)")
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::CheckerUnavailable(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl CheckerClient for HttpCheckerClient {
    #[instrument(skip(self, urls), fields(count = urls.len()))]
    async fn bulk_check(&self, urls: &[String], mode: &str) -> Result<Value, DomainError> {
        let body = BulkCheckRequest {
            api_key: &self.api_key,
            urls,
            mode,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Bulk check request timed out");
                    DomainError::CheckerTimeout
                } else {
                    warn!(error = %e, "Bulk check request failed");
                    DomainError::CheckerUnavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Checker rejected bulk check");
            return Err(DomainError::CheckerUnavailable(format!(
                "HTTP {}",
                status.as_u16()
            )));
        }

        let payload = response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                DomainError::CheckerTimeout
            } else {
                DomainError::CheckerUnavailable(format!("invalid response body: {}", e))
            }
        })?;

        debug!("Bulk check accepted");
        Ok(payload)
    }
}
