// Game registry: which share texts we recognise and how to read them.

pub use parsers::{extract_puzzle_id, GuessParser};

pub mod parsers;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use parsers::{ConnectionsParser, TradleParser, YeardleParser};

/// Declaration order is registry order: classification and leaderboard
/// sections both follow it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Game {
    Connections,
    Yeardle,
    Tradle,
}

impl Game {
    /// Literal text a share message must start with to belong to this game
    pub fn prefix(&self) -> &'static str {
        match self {
            Game::Connections => "Connections \nPuzzle #",
            Game::Yeardle => "#Yeardle",
            Game::Tradle => "#Tradle",
        }
    }

    pub fn parser(&self) -> &'static dyn GuessParser {
        match self {
            Game::Connections => &ConnectionsParser,
            Game::Yeardle => &YeardleParser,
            Game::Tradle => &TradleParser,
        }
    }

    /// Returns the first registered game whose prefix starts `content`
    pub fn classify(content: &str) -> Option<Game> {
        Game::iter().find(|game| content.starts_with(game.prefix()))
    }
}
