use async_trait::async_trait;
use brandwatch_domain::DomainError;
use serde_json::Value;

/// Synchronous command channel to the external checking system.
#[async_trait]
pub trait CheckerClient: Send + Sync {
    /// Submits `urls` for an immediate check and returns the checker's raw response.
    ///
    /// A timed-out request fails with `CheckerTimeout`; any other transport or
    /// upstream failure with `CheckerUnavailable`.
    async fn bulk_check(&self, urls: &[String], mode: &str) -> Result<Value, DomainError>;
}
