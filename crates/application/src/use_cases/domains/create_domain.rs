use brandwatch_domain::{
    canonical_key, Actor, DashboardEvent, DomainError, DomainRecord, LogAction, NewDomain,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{BrandRepository, DomainLogRepository, DomainRepository, EventNotifier};

pub struct CreateDomainUseCase {
    repo: Arc<dyn DomainRepository>,
    brand_repo: Arc<dyn BrandRepository>,
    log_repo: Arc<dyn DomainLogRepository>,
    notifier: Arc<dyn EventNotifier>,
}

impl CreateDomainUseCase {
    pub fn new(
        repo: Arc<dyn DomainRepository>,
        brand_repo: Arc<dyn BrandRepository>,
        log_repo: Arc<dyn DomainLogRepository>,
        notifier: Arc<dyn EventNotifier>,
    ) -> Self {
        Self {
            repo,
            brand_repo,
            log_repo,
            notifier,
        }
    }

    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(
        &self,
        actor: &Actor,
        domain: String,
        brand_id: i64,
        note: Option<String>,
    ) -> Result<DomainRecord, DomainError> {
        actor.require_editor()?;

        let key = canonical_key(&domain)?;
        let note = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        DomainRecord::validate_note(&note).map_err(DomainError::InvalidInput)?;

        self.brand_repo
            .get_by_id(brand_id)
            .await?
            .ok_or(DomainError::BrandNotFound(brand_id))?;

        let record = self
            .repo
            .create(NewDomain {
                domain: key,
                brand_id,
                note,
                created_by: actor.name.to_string(),
            })
            .await?;

        info!(
            domain_id = record.id,
            domain = %record.domain,
            brand_id = brand_id,
            "Domain created successfully"
        );

        if let Err(e) = self
            .log_repo
            .append(&record.domain, LogAction::Add, &actor.name)
            .await
        {
            warn!(error = %e, domain = %record.domain, "Failed to write domain log");
        }

        self.notifier
            .publish(DashboardEvent::DomainCreated(record.clone()));

        Ok(record)
    }
}
