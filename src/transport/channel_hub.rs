use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::debug;
use uuid::Uuid;

use super::{DeliveryError, MessageSink};

/// Fans outbound text out to every live subscriber of a channel
#[derive(Debug, Default, Clone)]
pub struct ChannelHub {
    // channel -> subscriber id -> sender
    channels: Arc<RwLock<HashMap<String, HashMap<Uuid, mpsc::UnboundedSender<String>>>>>,
}

impl ChannelHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn subscribe(&self, channel: &str) -> (Uuid, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();

        let mut channels = self.channels.write().await;
        channels
            .entry(channel.to_string())
            .or_default()
            .insert(id, sender);

        debug!(channel = %channel, subscriber = %id, "Subscriber added");
        (id, receiver)
    }

    pub async fn unsubscribe(&self, channel: &str, id: Uuid) {
        let mut channels = self.channels.write().await;
        if let Some(subscribers) = channels.get_mut(channel) {
            subscribers.remove(&id);
            if subscribers.is_empty() {
                channels.remove(channel);
            }
        }
        debug!(channel = %channel, subscriber = %id, "Subscriber removed");
    }

    pub async fn subscriber_count(&self, channel: &str) -> usize {
        self.channels
            .read()
            .await
            .get(channel)
            .map(HashMap::len)
            .unwrap_or_default()
    }
}

#[async_trait]
impl MessageSink for ChannelHub {
    async fn send(&self, channel: &str, text: &str) -> Result<(), DeliveryError> {
        let mut channels = self.channels.write().await;
        let Some(subscribers) = channels.get_mut(channel) else {
            return Err(DeliveryError::NoSubscribers(channel.to_string()));
        };

        // Receivers that went away are dropped here rather than on disconnect
        subscribers.retain(|_, sender| sender.send(text.to_string()).is_ok());

        let delivered = subscribers.len();
        if delivered == 0 {
            channels.remove(channel);
            return Err(DeliveryError::NoSubscribers(channel.to_string()));
        }

        debug!(channel = %channel, receivers = delivered, "Message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sends_to_every_subscriber_of_the_channel() {
        let hub = ChannelHub::new();
        let (_, mut first) = hub.subscribe("general").await;
        let (_, mut second) = hub.subscribe("general").await;
        let (_, mut other) = hub.subscribe("random").await;

        hub.send("general", "hello").await.unwrap();

        assert_eq!(first.recv().await.unwrap(), "hello");
        assert_eq!(second.recv().await.unwrap(), "hello");
        assert!(other.try_recv().is_err());
    }

    #[tokio::test]
    async fn sending_to_empty_channel_fails() {
        let hub = ChannelHub::new();

        assert!(matches!(
            hub.send("general", "hello").await,
            Err(DeliveryError::NoSubscribers(_))
        ));
    }

    #[tokio::test]
    async fn closed_receivers_are_pruned() {
        let hub = ChannelHub::new();
        let (_, receiver) = hub.subscribe("general").await;
        drop(receiver);

        assert!(hub.send("general", "hello").await.is_err());
        assert_eq!(hub.subscriber_count("general").await, 0);
    }

    #[tokio::test]
    async fn unsubscribe_removes_subscriber() {
        let hub = ChannelHub::new();
        let (id, _receiver) = hub.subscribe("general").await;
        assert_eq!(hub.subscriber_count("general").await, 1);

        hub.unsubscribe("general", id).await;

        assert_eq!(hub.subscriber_count("general").await, 0);
    }
}
