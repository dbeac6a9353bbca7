use brandwatch_domain::{DomainError, DomainRecord};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DomainRepository;

/// Active inventory as consumed by the checking system.
pub struct ListCheckerUrlsUseCase {
    repo: Arc<dyn DomainRepository>,
}

impl ListCheckerUrlsUseCase {
    pub fn new(repo: Arc<dyn DomainRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<DomainRecord>, DomainError> {
        self.repo.get_active().await
    }
}
