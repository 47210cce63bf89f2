use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use dlebot::transport::{DeliveryError, MessageSink};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Sink that remembers everything sent, per channel
#[derive(Clone, Default)]
pub struct MockMessageSink {
    sent_messages: Arc<RwLock<HashMap<String, Vec<String>>>>,
}

impl MockMessageSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_messages_for(&self, channel: &str) -> Vec<String> {
        self.sent_messages
            .read()
            .await
            .get(channel)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl MessageSink for MockMessageSink {
    async fn send(&self, channel: &str, text: &str) -> Result<(), DeliveryError> {
        self.sent_messages
            .write()
            .await
            .entry(channel.to_string())
            .or_default()
            .push(text.to_string());
        Ok(())
    }
}
