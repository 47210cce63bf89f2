use std::sync::LazyLock;

use regex::Regex;

use crate::scores::ScoreError;

mod connections;
mod tradle;
mod yeardle;

pub use connections::ConnectionsParser;
pub use tradle::{TradleParser, TRADLE_FAILED};
pub use yeardle::{YeardleParser, YEARDLE_FAILED};

static PUZZLE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9]{3})").expect("puzzle id pattern is valid"));

static LEADING_PICTOGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Extended_Pictographic}").expect("leading pictograph pattern is valid")
});

static ANY_PICTOGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\p{Extended_Pictographic}").expect("pictograph pattern is valid")
});

/// Reads the guess count out of one game's share text.
///
/// Lower counts are better. Each game picks its own sentinel for an unsolved
/// puzzle.
pub trait GuessParser: Send + Sync {
    fn guess_count(&self, content: &str) -> Result<u32, ScoreError>;
}

/// Finds the first `#` followed by three digits and returns those digits.
pub fn extract_puzzle_id(content: &str) -> Result<u32, ScoreError> {
    let captures = PUZZLE_ID
        .captures(content)
        .ok_or_else(|| ScoreError::Malformed("no #NNN puzzle id found".to_string()))?;

    captures[1]
        .parse()
        .map_err(|_| ScoreError::Malformed(format!("invalid puzzle id {}", &captures[1])))
}

pub(crate) fn starts_with_pictograph(line: &str) -> bool {
    LEADING_PICTOGRAPH.is_match(line)
}

/// Pictographic glyphs of `line` in order. Spaces, text and variation
/// selectors between them are skipped.
pub(crate) fn pictographs(line: &str) -> impl Iterator<Item = &str> {
    ANY_PICTOGRAPH.find_iter(line).map(|found| found.as_str())
}
