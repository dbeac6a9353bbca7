use brandwatch_domain::DomainError;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::CheckerClient;

/// Forwards an on-demand check of a few URLs to the external checker.
pub struct BulkCheckUseCase {
    client: Option<Arc<dyn CheckerClient>>,
    max_urls: usize,
}

impl BulkCheckUseCase {
    pub fn new(client: Option<Arc<dyn CheckerClient>>, max_urls: usize) -> Self {
        Self { client, max_urls }
    }

    #[instrument(skip(self, urls), fields(count = urls.len()))]
    pub async fn execute(&self, urls: Vec<String>, mode: &str) -> Result<Value, DomainError> {
        let urls: Vec<String> = urls
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();

        if urls.is_empty() {
            return Err(DomainError::InvalidInput("URLs array is required".to_string()));
        }

        if urls.len() > self.max_urls {
            return Err(DomainError::InvalidInput(format!(
                "Maximum {} URLs per check",
                self.max_urls
            )));
        }

        let client = self.client.as_ref().ok_or_else(|| {
            DomainError::CheckerUnavailable("bulk check endpoint is not configured".to_string())
        })?;

        let response = client.bulk_check(&urls, mode).await?;

        info!(count = urls.len(), mode = %mode, "Bulk check forwarded");

        Ok(response)
    }
}
