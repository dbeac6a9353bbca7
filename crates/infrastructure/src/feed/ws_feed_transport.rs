use async_trait::async_trait;
use brandwatch_application::ports::{FeedConnection, FeedTransport};
use brandwatch_domain::DomainError;
use futures::StreamExt;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

/// WebSocket client for the checker's blocked-domain feed.
pub struct WsFeedTransport {
    url: String,
    connect_timeout: Duration,
}

impl WsFeedTransport {
    /// `connect_timeout` bounds the TCP connect and the WebSocket handshake together.
    pub fn new(url: &str, connect_timeout: Duration) -> Self {
        Self {
            url: url.to_string(),
            connect_timeout,
        }
    }
}

#[async_trait]
impl FeedTransport for WsFeedTransport {
    async fn connect(&self) -> Result<Box<dyn FeedConnection>, DomainError> {
        let (stream, _response) = timeout(self.connect_timeout, connect_async(self.url.as_str()))
            .await
            .map_err(|_| {
                warn!(
                    url = %self.url,
                    timeout_ms = self.connect_timeout.as_millis() as u64,
                    "Feed connection timed out"
                );
                DomainError::UpstreamTransportFault(format!(
                    "connect to {} timed out after {:?}",
                    self.url, self.connect_timeout
                ))
            })?
            .map_err(|e| {
                warn!(error = %e, url = %self.url, "Feed connection failed");
                DomainError::UpstreamTransportFault(e.to_string())
            })?;

        info!(url = %self.url, "Connected to checker feed");
        Ok(Box::new(WsFeedConnection { stream }))
    }
}

struct WsFeedConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl FeedConnection for WsFeedConnection {
    async fn next_message(&mut self) -> Result<Option<String>, DomainError> {
        while let Some(frame) = self.stream.next().await {
            match frame {
                Ok(Message::Text(text)) => return Ok(Some(text.to_string())),
                Ok(Message::Close(_)) => return Ok(None),
                Ok(_) => debug!("Ignoring non-text feed frame"),
                Err(e) => return Err(DomainError::UpstreamTransportFault(e.to_string())),
            }
        }
        Ok(None)
    }

    async fn close(&mut self) {
        if let Err(e) = self.stream.close(None).await {
            debug!(error = %e, "Feed close handshake failed");
        }
    }
}
