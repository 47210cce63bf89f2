use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("No subscribers on channel {0}")]
    NoSubscribers(String),

    #[error("Send failed: {0}")]
    SendFailed(String),
}

/// Outbound half of the chat transport
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, channel: &str, text: &str) -> Result<(), DeliveryError>;
}
