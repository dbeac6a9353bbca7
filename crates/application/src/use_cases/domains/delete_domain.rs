use brandwatch_domain::{Actor, DashboardEvent, DomainError, LogAction};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{DomainLogRepository, DomainRepository, EventNotifier};

pub struct DeleteDomainUseCase {
    repo: Arc<dyn DomainRepository>,
    log_repo: Arc<dyn DomainLogRepository>,
    notifier: Arc<dyn EventNotifier>,
}

impl DeleteDomainUseCase {
    pub fn new(
        repo: Arc<dyn DomainRepository>,
        log_repo: Arc<dyn DomainLogRepository>,
        notifier: Arc<dyn EventNotifier>,
    ) -> Self {
        Self {
            repo,
            log_repo,
            notifier,
        }
    }

    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(&self, actor: &Actor, id: i64) -> Result<(), DomainError> {
        actor.require_editor()?;

        let record = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DomainNotFound(id))?;

        self.repo.delete(id).await?;

        info!(domain_id = id, domain = %record.domain, "Domain deleted successfully");

        if let Err(e) = self
            .log_repo
            .append(&record.domain, LogAction::Delete, &actor.name)
            .await
        {
            warn!(error = %e, domain = %record.domain, "Failed to write domain log");
        }

        self.notifier.publish(DashboardEvent::DomainDeleted { id });

        Ok(())
    }
}
