use brandwatch_domain::{canonical_key, DomainError, ScanObservation, StatusChange};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::UpdateBlockStatusUseCase;
use crate::ports::DomainRepository;

const BLOCKED_DOMAIN_EVENT: &str = "blocked_domain";

#[derive(Debug, Deserialize)]
struct FeedMessage {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default, rename = "blockedId")]
    blocked_id: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    Applied(StatusChange),
    /// Well-formed message of a type the bridge does not handle.
    Ignored,
    /// The feed named a domain that is not in the inventory.
    UnknownDomain(String),
}

/// Routes one raw feed message into the status updater.
pub struct ApplyFeedEventUseCase {
    repo: Arc<dyn DomainRepository>,
    updater: Arc<UpdateBlockStatusUseCase>,
}

impl ApplyFeedEventUseCase {
    pub fn new(repo: Arc<dyn DomainRepository>, updater: Arc<UpdateBlockStatusUseCase>) -> Self {
        Self { repo, updater }
    }

    /// Malformed input fails with `UpstreamProtocolFault`; the caller logs and drops it.
    #[instrument(skip(self, raw))]
    pub async fn execute(&self, raw: &str) -> Result<FeedOutcome, DomainError> {
        let message: FeedMessage = serde_json::from_str(raw)
            .map_err(|e| DomainError::UpstreamProtocolFault(e.to_string()))?;

        if message.kind != BLOCKED_DOMAIN_EVENT {
            debug!(kind = %message.kind, "Ignoring feed message");
            return Ok(FeedOutcome::Ignored);
        }

        let domain = message.domain.ok_or_else(|| {
            DomainError::UpstreamProtocolFault("blocked_domain message without domain".to_string())
        })?;
        let status = message.status.ok_or_else(|| {
            DomainError::UpstreamProtocolFault("blocked_domain message without status".to_string())
        })?;
        let key = canonical_key(&domain)
            .map_err(|e| DomainError::UpstreamProtocolFault(e.to_string()))?;

        let Some(record) = self.repo.get_by_key(&key).await? else {
            info!(domain = %key, "Feed references unknown domain, dropping");
            return Ok(FeedOutcome::UnknownDomain(key));
        };

        let observation = ScanObservation::from_status(&status, message.blocked_id);
        let change = self.updater.execute(record.id, observation).await?;

        Ok(FeedOutcome::Applied(change))
    }
}
