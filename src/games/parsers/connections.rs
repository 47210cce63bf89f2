use crate::scores::ScoreError;

use super::{starts_with_pictograph, GuessParser};

/// Grid-style game: one row of coloured squares per guess
pub struct ConnectionsParser;

impl GuessParser for ConnectionsParser {
    fn guess_count(&self, content: &str) -> Result<u32, ScoreError> {
        let rows = content
            .split('\n')
            .filter(|line| starts_with_pictograph(line))
            .count();
        Ok(rows as u32)
    }
}
