use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

/// Minimal WebSocket surface a channel subscriber needs
#[async_trait]
pub trait SocketWrapper: Send {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError>;

    /// Next text frame from the client, `None` once the client has gone
    async fn receive_message(&mut self) -> Result<Option<String>, SocketError>;

    async fn close(&mut self) -> Result<(), SocketError>;
}

#[derive(Debug, Error)]
pub enum SocketError {
    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Receive failed: {0}")]
    ReceiveFailed(String),
}

#[async_trait]
impl SocketWrapper for WebSocket {
    async fn send_message(&mut self, message: String) -> Result<(), SocketError> {
        self.send(Message::Text(message))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }

    async fn receive_message(&mut self) -> Result<Option<String>, SocketError> {
        loop {
            match self.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text)),
                Some(Ok(Message::Close(_))) | None => return Ok(None),
                Some(Ok(_)) => continue, // ping/pong/binary
                Some(Err(e)) => return Err(SocketError::ReceiveFailed(e.to_string())),
            }
        }
    }

    async fn close(&mut self) -> Result<(), SocketError> {
        self.send(Message::Close(None))
            .await
            .map_err(|e| SocketError::SendFailed(e.to_string()))
    }
}

/// A read-only listener on one channel.
///
/// Outbound text from the hub is forwarded to the socket. Inbound frames are
/// only watched for disconnects.
pub struct Subscription {
    channel: String,
    socket: Box<dyn SocketWrapper>,
    outbound: mpsc::UnboundedReceiver<String>,
}

impl Subscription {
    pub fn new(
        channel: String,
        socket: Box<dyn SocketWrapper>,
        outbound: mpsc::UnboundedReceiver<String>,
    ) -> Self {
        Self {
            channel,
            socket,
            outbound,
        }
    }

    pub async fn run(mut self) -> Result<(), SocketError> {
        loop {
            tokio::select! {
                msg = self.outbound.recv() => match msg {
                    Some(text) => self.socket.send_message(text).await?,
                    None => break,
                },
                msg = self.socket.receive_message() => match msg? {
                    Some(text) => {
                        debug!(channel = %self.channel, len = text.len(), "Ignoring inbound frame");
                    }
                    None => break,
                },
            }
        }

        let _ = self.socket.close().await;
        Ok(())
    }
}
