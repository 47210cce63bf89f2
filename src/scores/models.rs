use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::games::{extract_puzzle_id, Game};

use super::ScoreError;

/// One player's result for one puzzle, as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub game: Game,
    pub player: String,
    pub puzzle_id: u32,
    /// Unix seconds at which the score was recorded
    pub timestamp: i64,
    pub guess_count: u32,
}

impl Score {
    pub fn new(
        game: Game,
        player: impl Into<String>,
        puzzle_id: u32,
        timestamp: i64,
        guess_count: u32,
    ) -> Self {
        Self {
            game,
            player: player.into(),
            puzzle_id,
            timestamp,
            guess_count,
        }
    }

    /// Parses a share message for `game`, stamping it with `now`.
    ///
    /// The player comes from the transport, never from the text, and any
    /// date inside the message is ignored.
    pub fn extract(
        game: Game,
        content: &str,
        player: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, ScoreError> {
        let puzzle_id = extract_puzzle_id(content)?;
        let guess_count = game.parser().guess_count(content)?;

        Ok(Self::new(
            game,
            player,
            puzzle_id,
            now.timestamp(),
            guess_count,
        ))
    }

    /// Same game, player and puzzle
    pub fn same_entry(&self, other: &Score) -> bool {
        self.game == other.game && self.player == other.player && self.puzzle_id == other.puzzle_id
    }
}
