use std::sync::LazyLock;

use regex::Regex;

use crate::scores::ScoreError;

use super::GuessParser;

/// Guess count recorded when the share text has no `N/6` token
pub const TRADLE_FAILED: u32 = 7;

static ATTEMPTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)/6").expect("attempt counter pattern is valid"));

/// Attempt-counter game: the share text says `N/6`, or `X/6` when unsolved
pub struct TradleParser;

impl GuessParser for TradleParser {
    fn guess_count(&self, content: &str) -> Result<u32, ScoreError> {
        match ATTEMPTS.captures(content) {
            Some(captures) => captures[1].parse().map_err(|_| {
                ScoreError::Malformed(format!("attempt count {} out of range", &captures[1]))
            }),
            None => Ok(TRADLE_FAILED),
        }
    }
}
