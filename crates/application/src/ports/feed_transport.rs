use async_trait::async_trait;
use brandwatch_domain::DomainError;

/// Opens connections to the external blocked-domain feed.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn FeedConnection>, DomainError>;
}

/// One live feed connection.
#[async_trait]
pub trait FeedConnection: Send {
    /// Next text message. `Ok(None)` means the peer closed the connection.
    async fn next_message(&mut self) -> Result<Option<String>, DomainError>;

    async fn close(&mut self);
}
