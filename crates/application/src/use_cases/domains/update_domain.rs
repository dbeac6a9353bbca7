use brandwatch_domain::{
    canonical_key, Actor, DashboardEvent, DomainError, DomainRecord, DomainUpdate,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{BrandRepository, DomainRepository, EventNotifier};

pub struct UpdateDomainUseCase {
    repo: Arc<dyn DomainRepository>,
    brand_repo: Arc<dyn BrandRepository>,
    notifier: Arc<dyn EventNotifier>,
}

impl UpdateDomainUseCase {
    pub fn new(
        repo: Arc<dyn DomainRepository>,
        brand_repo: Arc<dyn BrandRepository>,
        notifier: Arc<dyn EventNotifier>,
    ) -> Self {
        Self {
            repo,
            brand_repo,
            notifier,
        }
    }

    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(
        &self,
        actor: &Actor,
        id: i64,
        mut update: DomainUpdate,
    ) -> Result<DomainRecord, DomainError> {
        actor.require_editor()?;

        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::DomainNotFound(id))?;

        if let Some(domain) = update.domain.take() {
            update.domain = Some(canonical_key(&domain)?);
        }

        if let Some(note) = update.note.take() {
            let note = Some(note.trim().to_string());
            DomainRecord::validate_note(&note).map_err(DomainError::InvalidInput)?;
            update.note = note;
        }

        if let Some(brand_id) = update.brand_id {
            self.brand_repo
                .get_by_id(brand_id)
                .await?
                .ok_or(DomainError::BrandNotFound(brand_id))?;
        }

        let updated = self.repo.update(id, update, &actor.name).await?;

        info!(
            domain_id = id,
            domain = %updated.domain,
            is_active = updated.is_active,
            "Domain updated successfully"
        );

        self.notifier
            .publish(DashboardEvent::DomainUpdated(updated.clone()));

        Ok(updated)
    }
}
