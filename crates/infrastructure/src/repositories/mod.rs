pub mod brand_repository;
pub mod domain_log_repository;
pub mod domain_repository;
mod domain_row_mapper;

pub use brand_repository::SqliteBrandRepository;
pub use domain_log_repository::SqliteDomainLogRepository;
pub use domain_repository::SqliteDomainRepository;

pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.to_string().contains("FOREIGN KEY constraint failed")
}
