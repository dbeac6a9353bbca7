use async_trait::async_trait;
use brandwatch_domain::{Brand, BrandUpdate, DomainError, NewBrand};

#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Fails with `DuplicateKey` when the name or code is already taken.
    async fn create(&self, brand: NewBrand) -> Result<Brand, DomainError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Brand>, DomainError>;
    /// All brands ordered by name; `active` restricts to that flag when set.
    async fn get_all(&self, active: Option<bool>) -> Result<Vec<Brand>, DomainError>;
    async fn update(&self, id: i64, update: BrandUpdate) -> Result<Brand, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
    async fn count_domains(&self, id: i64) -> Result<u64, DomainError>;
}
