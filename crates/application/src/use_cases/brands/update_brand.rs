use brandwatch_domain::{Actor, Brand, BrandUpdate, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BrandRepository;

pub struct UpdateBrandUseCase {
    repo: Arc<dyn BrandRepository>,
}

impl UpdateBrandUseCase {
    pub fn new(repo: Arc<dyn BrandRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(
        &self,
        actor: &Actor,
        id: i64,
        mut update: BrandUpdate,
    ) -> Result<Brand, DomainError> {
        actor.require_editor()?;

        self.repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::BrandNotFound(id))?;

        if let Some(ref mut name) = update.name {
            *name = Brand::canonical_label(name);
            Brand::validate_name(name).map_err(DomainError::InvalidBrand)?;
        }

        if let Some(ref mut code) = update.code {
            *code = Brand::canonical_label(code);
            Brand::validate_code(code).map_err(DomainError::InvalidBrand)?;
        }

        if let Some(ref mut color) = update.color {
            *color = color.trim().to_string();
            Brand::validate_color(color).map_err(DomainError::InvalidBrand)?;
        }

        if update.description.is_some() {
            Brand::validate_description(&update.description).map_err(DomainError::InvalidBrand)?;
        }

        let updated = self.repo.update(id, update).await?;

        info!(
            brand_id = id,
            name = %updated.name,
            code = %updated.code,
            is_active = updated.is_active,
            "Brand updated successfully"
        );

        Ok(updated)
    }
}
