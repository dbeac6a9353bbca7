use async_trait::async_trait;
use brandwatch_domain::{DomainError, DomainLog, LogAction};

#[async_trait]
pub trait DomainLogRepository: Send + Sync {
    async fn append(&self, domain: &str, action: LogAction, actor: &str)
        -> Result<(), DomainError>;

    async fn append_many(
        &self,
        domains: &[String],
        action: LogAction,
        actor: &str,
    ) -> Result<(), DomainError>;

    /// Newest entries first.
    async fn get_recent(&self, limit: u32) -> Result<Vec<DomainLog>, DomainError>;
}
