use brandwatch_domain::{
    Actor, BlockStatus, DashboardEvent, DomainError, DomainRecord, StatusPatch,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{Clock, DomainRepository, EventNotifier};

/// Manual edit of one or more status facets by an administrator.
pub struct PatchDomainStatusUseCase {
    repo: Arc<dyn DomainRepository>,
    notifier: Arc<dyn EventNotifier>,
    clock: Arc<dyn Clock>,
}

impl PatchDomainStatusUseCase {
    pub fn new(
        repo: Arc<dyn DomainRepository>,
        notifier: Arc<dyn EventNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            notifier,
            clock,
        }
    }

    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(
        &self,
        actor: &Actor,
        id: i64,
        mut patch: StatusPatch,
    ) -> Result<DomainRecord, DomainError> {
        actor.require_admin()?;

        if patch.is_empty() {
            return Err(DomainError::InvalidInput(
                "At least one status field is required".to_string(),
            ));
        }

        let record = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DomainNotFound(id))?;

        let now = self.clock.now();

        if let Some((BlockStatus::Blocked, ref mut marker)) = patch.nawala {
            if marker.as_deref().map_or(true, str::is_empty) {
                *marker = Some(format!("manual_{}", now.timestamp_millis()));
            }
        }

        let mut status = record.status.clone();
        patch.apply_to(&mut status, now);

        let updated = self.repo.save_status(id, &status, &actor.name).await?;

        info!(
            domain_id = id,
            domain = %updated.domain,
            nawala = %updated.status.nawala.status,
            "Domain status patched"
        );

        self.notifier
            .publish(DashboardEvent::DomainUpdated(updated.clone()));

        Ok(updated)
    }
}
