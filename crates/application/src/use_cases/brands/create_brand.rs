use brandwatch_domain::{Actor, Brand, DomainError, NewBrand, DEFAULT_BRAND_COLOR};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BrandRepository;

pub struct CreateBrandUseCase {
    repo: Arc<dyn BrandRepository>,
}

impl CreateBrandUseCase {
    pub fn new(repo: Arc<dyn BrandRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, actor), fields(actor = %actor.name))]
    pub async fn execute(
        &self,
        actor: &Actor,
        name: String,
        code: Option<String>,
        description: Option<String>,
        color: Option<String>,
    ) -> Result<Brand, DomainError> {
        actor.require_editor()?;

        let name = Brand::canonical_label(&name);
        let code = code
            .map(|c| Brand::canonical_label(&c))
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| name.clone());
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let color = color
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_BRAND_COLOR.to_string());

        Brand::validate_name(&name).map_err(DomainError::InvalidBrand)?;
        Brand::validate_code(&code).map_err(DomainError::InvalidBrand)?;
        Brand::validate_description(&description).map_err(DomainError::InvalidBrand)?;
        Brand::validate_color(&color).map_err(DomainError::InvalidBrand)?;

        let description = description.unwrap_or_else(|| format!("{} Brand", name));

        let brand = self
            .repo
            .create(NewBrand {
                name,
                code,
                description,
                color,
                created_by: actor.name.to_string(),
            })
            .await?;

        info!(
            brand_id = ?brand.id,
            name = %brand.name,
            code = %brand.code,
            "Brand created successfully"
        );

        Ok(brand)
    }
}
