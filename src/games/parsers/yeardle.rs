use crate::scores::ScoreError;

use super::{pictographs, GuessParser};

/// Guess count recorded when the reveal line has no green square
pub const YEARDLE_FAILED: u32 = 9;

const CORRECT: &str = "\u{1F7E9}";

/// Position-reveal game: the second line shows one square per guess and the
/// green square marks the guess that hit. Only the squares count towards the
/// position.
pub struct YeardleParser;

impl GuessParser for YeardleParser {
    fn guess_count(&self, content: &str) -> Result<u32, ScoreError> {
        let line = content
            .split('\n')
            .nth(1)
            .ok_or_else(|| ScoreError::Malformed("missing guess line".to_string()))?;

        let mut squares = pictographs(line).peekable();
        if squares.peek().is_none() {
            return Err(ScoreError::Malformed("guess line has no squares".to_string()));
        }

        Ok(match squares.position(|square| square == CORRECT) {
            Some(index) => index as u32 + 1,
            None => YEARDLE_FAILED,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#Yeardle #731\n🟩⬜⬜⬜⬜⬜⬜⬜", 1)]
    #[case("#Yeardle #731\n⬛🟨🟩⬜⬜⬜⬜⬜", 3)]
    #[case("#Yeardle #731\n⬛\u{FE0F}🟨🟩⬜\u{FE0F}", 3)]
    #[case("#Yeardle #731\n⬛ 🟨 🟩 ⬜", 3)]
    #[case("#Yeardle #731\nguesses: ⬛\u{FE0F} 🟩", 2)]
    #[case("#Yeardle #731\n⬛🟨🟧🟨⬛🟧🟨⬛", YEARDLE_FAILED)]
    fn reads_green_square_position(#[case] content: &str, #[case] expected: u32) {
        assert_eq!(YeardleParser.guess_count(content).unwrap(), expected);
    }

    #[rstest]
    #[case("#Yeardle #731")]
    #[case("#Yeardle #731\nhttps://histordle.com/yeardle")]
    #[case("#Yeardle #731\n\n🟩")]
    fn missing_reveal_line_is_malformed(#[case] content: &str) {
        assert!(matches!(
            YeardleParser.guess_count(content),
            Err(ScoreError::Malformed(_))
        ));
    }
}
