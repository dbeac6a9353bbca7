use brandwatch_domain::{Brand, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::BrandRepository;

pub struct GetBrandsUseCase {
    repo: Arc<dyn BrandRepository>,
}

impl GetBrandsUseCase {
    pub fn new(repo: Arc<dyn BrandRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self, active: Option<bool>) -> Result<Vec<Brand>, DomainError> {
        let brands = self.repo.get_all(active).await?;
        debug!(count = brands.len(), "Brands retrieved");
        Ok(brands)
    }

    /// The brand together with the number of domains referencing it.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<(Brand, u64), DomainError> {
        let brand = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::BrandNotFound(id))?;
        let domain_count = self.repo.count_domains(id).await?;
        Ok((brand, domain_count))
    }
}
