use brandwatch_domain::{Actor, DashboardEvent, DomainError, LogAction};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{DomainLogRepository, DomainRepository, EventNotifier};

pub struct DeleteBlockedDomainsUseCase {
    repo: Arc<dyn DomainRepository>,
    log_repo: Arc<dyn DomainLogRepository>,
    notifier: Arc<dyn EventNotifier>,
}

impl DeleteBlockedDomainsUseCase {
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

    /// Removes every record currently marked blocked. Returns how many were removed.
    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(&self, actor: &Actor) -> Result<u64, DomainError> {
        actor.require_editor()?;

        let removed = self.repo.delete_blocked().await?;
        let count = removed.len() as u64;

        info!(count = count, "Blocked domains deleted");

        if count == 0 {
            return Ok(0);
        }

        if let Err(e) = self
            .log_repo
            .append_many(&removed, LogAction::Delete, &actor.name)
            .await
        {
            warn!(error = %e, count = count, "Failed to write domain logs");
        }

        self.notifier.publish(DashboardEvent::BulkDeleted { count });

        Ok(count)
    }
}
