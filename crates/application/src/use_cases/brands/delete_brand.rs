use brandwatch_domain::{Actor, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BrandRepository;

pub struct DeleteBrandUseCase {
    repo: Arc<dyn BrandRepository>,
}

impl DeleteBrandUseCase {
    pub fn new(repo: Arc<dyn BrandRepository>) -> Self {
        Self { repo }
    }

    /// Refuses to delete a brand that still owns domain records.
    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(&self, actor: &Actor, id: i64) -> Result<(), DomainError> {
        actor.require_editor()?;

        let brand = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::BrandNotFound(id))?;

        let domain_count = self.repo.count_domains(id).await?;
        if domain_count > 0 {
            return Err(DomainError::BrandHasDomains(domain_count));
        }

        self.repo.delete(id).await?;

        info!(brand_id = id, name = %brand.name, "Brand deleted successfully");

        Ok(())
    }
}
