use brandwatch_domain::{
    Actor, BlockFacet, DashboardEvent, DomainError, ScanObservation, StatusChange,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{Clock, DomainRepository, EventNotifier};
use crate::services::BroadcastCoalescer;

/// The single write path for block-status observations from the checking system.
///
/// Every successful update is queued on the coalescer. A transition to
/// blocked is additionally published on its own, straight away.
pub struct UpdateBlockStatusUseCase {
    repo: Arc<dyn DomainRepository>,
    coalescer: Arc<BroadcastCoalescer>,
    notifier: Arc<dyn EventNotifier>,
    clock: Arc<dyn Clock>,
}

impl UpdateBlockStatusUseCase {
    pub fn new(
        repo: Arc<dyn DomainRepository>,
        coalescer: Arc<BroadcastCoalescer>,
        notifier: Arc<dyn EventNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            coalescer,
            notifier,
            clock,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: i64,
        observation: ScanObservation,
    ) -> Result<StatusChange, DomainError> {
        let record = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DomainNotFound(id))?;

        let now = self.clock.now();
        let facet = if observation.blocked {
            let marker = observation
                .marker
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| format!("scan_{}", now.timestamp_millis()));
            BlockFacet::blocked(marker, now)
        } else {
            BlockFacet::accessible(now)
        };

        let mut status = record.status.clone();
        status.nawala = facet;

        let updated = self
            .repo
            .save_status(id, &status, &Actor::system().name)
            .await?;
        let change = StatusChange::from_record(&updated);

        info!(
            domain_id = id,
            domain = %updated.domain,
            status = %updated.status.nawala.status,
            "Block status updated"
        );

        if change.nawala.is_blocked() {
            self.notifier
                .publish(DashboardEvent::NawalaUpdated(change.clone()));
        }
        self.coalescer.enqueue(change.clone());

        Ok(change)
    }
}
