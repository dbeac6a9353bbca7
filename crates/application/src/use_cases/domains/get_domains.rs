use brandwatch_domain::{BlockStatus, DomainError, DomainFilter, DomainRecord};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::DomainRepository;

const MAX_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, Serialize)]
pub struct DomainPage {
    pub domains: Vec<DomainRecord>,
    /// Records matching the filter across all pages.
    pub total: u64,
    /// Blocked records in the whole store, regardless of the filter.
    pub total_blocked: u64,
}

pub struct GetDomainsUseCase {
    repo: Arc<dyn DomainRepository>,
}

impl GetDomainsUseCase {
    pub fn new(repo: Arc<dyn DomainRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, mut filter: DomainFilter) -> Result<DomainPage, DomainError> {
        filter.limit = filter.limit.clamp(1, MAX_PAGE_SIZE);
        filter.search = filter
            .search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let (domains, total) = self.repo.list(&filter).await?;
        let total_blocked = self.repo.count_by_block_status(BlockStatus::Blocked).await?;

        debug!(
            returned = domains.len(),
            total = total,
            total_blocked = total_blocked,
            "Domains listed"
        );

        Ok(DomainPage {
            domains,
            total,
            total_blocked,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<DomainRecord, DomainError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DomainNotFound(id))
    }
}
