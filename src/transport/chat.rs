use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::games::Game;
use crate::scores::{Admission, RejectReason, Score, ScoreboardService, StoreError};

use super::{Command, MessageSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatOutcome {
    Accepted,
    Stale,
    Duplicate,
    Malformed,
    /// Not a command and not a recognised share text
    Ignored,
    Command,
}

impl From<RejectReason> for ChatOutcome {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::Stale => ChatOutcome::Stale,
            RejectReason::Duplicate => ChatOutcome::Duplicate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub outcome: ChatOutcome,
    /// Text sent back to the channel for commands
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl ChatReply {
    fn outcome(outcome: ChatOutcome) -> Self {
        Self {
            outcome,
            reply: None,
        }
    }
}

/// Entry point for every inbound chat message
pub struct ChatEventHandler {
    service: Arc<ScoreboardService>,
    sink: Arc<dyn MessageSink>,
}

impl ChatEventHandler {
    pub fn new(service: Arc<ScoreboardService>, sink: Arc<dyn MessageSink>) -> Self {
        Self { service, sink }
    }

    /// Classifies, extracts and admits a message, or answers a command.
    ///
    /// Malformed share texts are logged and dropped. Only a failed write to
    /// storage is an error.
    pub async fn handle_chat_message(
        &self,
        channel: &str,
        player: &str,
        content: &str,
    ) -> Result<ChatReply, StoreError> {
        if let Some(command) = Command::parse(content) {
            let reply = self.run_command(channel, command).await;
            return Ok(ChatReply {
                outcome: ChatOutcome::Command,
                reply: Some(reply),
            });
        }

        let Some(game) = Game::classify(content) else {
            debug!(channel = %channel, player = %player, "Message is not a share text");
            return Ok(ChatReply::outcome(ChatOutcome::Ignored));
        };

        info!(channel = %channel, player = %player, %game, "Received share text");

        let candidate = match Score::extract(game, content, player, self.service.now()) {
            Ok(score) => score,
            Err(err) => {
                warn!(
                    channel = %channel,
                    player = %player,
                    %game,
                    error = %err,
                    "Dropping malformed share text"
                );
                return Ok(ChatReply::outcome(ChatOutcome::Malformed));
            }
        };

        let outcome = match self.service.try_admit(candidate).await? {
            Admission::Accepted { .. } => ChatOutcome::Accepted,
            Admission::Rejected(reason) => reason.into(),
        };

        Ok(ChatReply::outcome(outcome))
    }

    async fn run_command(&self, channel: &str, command: Command) -> String {
        let text = match command {
            Command::Scoreboard => self.service.render_leaderboard().await,
            Command::Daily => self.service.render_daily_summary().await,
        };

        if let Err(err) = self.sink.send(channel, &text).await {
            warn!(channel = %channel, ?command, error = %err, "Failed to send command reply");
        }

        text
    }
}
