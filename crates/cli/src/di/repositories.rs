use brandwatch_application::ports::{BrandRepository, DomainLogRepository, DomainRepository};
use brandwatch_infrastructure::repositories::{
    SqliteBrandRepository, SqliteDomainLogRepository, SqliteDomainRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub brand: Arc<dyn BrandRepository>,
    pub domain: Arc<dyn DomainRepository>,
    pub domain_log: Arc<dyn DomainLogRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            brand: Arc::new(SqliteBrandRepository::new(pool.clone())),
            domain: Arc::new(SqliteDomainRepository::new(pool.clone())),
            domain_log: Arc::new(SqliteDomainLogRepository::new(pool)),
        }
    }
}
