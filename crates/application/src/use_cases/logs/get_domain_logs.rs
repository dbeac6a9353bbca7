use brandwatch_domain::{Actor, DomainError, DomainLog};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DomainLogRepository;

const DEFAULT_LIMIT: u32 = 200;
const MAX_LIMIT: u32 = 1000;

pub struct GetDomainLogsUseCase {
    repo: Arc<dyn DomainLogRepository>,
}

impl GetDomainLogsUseCase {
    pub fn new(repo: Arc<dyn DomainLogRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(
        &self,
        actor: &Actor,
        limit: Option<u32>,
    ) -> Result<Vec<DomainLog>, DomainError> {
        actor.require_admin()?;
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        self.repo.get_recent(limit).await
    }
}
