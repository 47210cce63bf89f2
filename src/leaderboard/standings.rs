use std::fmt::{self, Write};

use strum::IntoEnumIterator;

use crate::games::Game;
use crate::scores::Score;

const HEADER: &str = "# Current -dle game scores:";
const STATS_HEADER: &str = "## Current stats:";
const STATS_COLUMNS: &str = "Player | Wins | Total";

/// One game's scores, best first
#[derive(Debug, Clone, PartialEq)]
pub struct GameStandings {
    pub game: Game,
    pub entries: Vec<Score>,
}

impl GameStandings {
    pub fn best(&self) -> Option<&Score> {
        self.entries.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    pub player: String,
    pub wins: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub games: Vec<GameStandings>,
    /// Most wins first
    pub players: Vec<PlayerStats>,
}

impl Leaderboard {
    pub fn from_scores(scores: &[Score]) -> Self {
        let mut players: Vec<PlayerStats> = Vec::new();
        for score in scores {
            match players.iter_mut().find(|stats| stats.player == score.player) {
                Some(stats) => stats.total += 1,
                None => players.push(PlayerStats {
                    player: score.player.clone(),
                    wins: 0,
                    total: 1,
                }),
            }
        }

        let mut games = Vec::new();
        for game in Game::iter() {
            let mut entries: Vec<Score> = scores
                .iter()
                .filter(|score| score.game == game)
                .cloned()
                .collect();
            if entries.is_empty() {
                continue;
            }

            // Stable: equal guess counts stay in submission order
            entries.sort_by_key(|score| score.guess_count);

            if let Some(stats) = players
                .iter_mut()
                .find(|stats| stats.player == entries[0].player)
            {
                stats.wins += 1;
            }

            games.push(GameStandings { game, entries });
        }

        players.sort_by(|a, b| b.wins.cmp(&a.wins));

        Self { games, players }
    }

    /// Top of the stats table
    pub fn winner(&self) -> Option<&PlayerStats> {
        self.players.first()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Everything below the title line, shared with the daily summary
    pub(crate) fn write_body(&self, out: &mut impl Write) -> fmt::Result {
        for standings in &self.games {
            let Some(best) = standings.best() else {
                continue;
            };

            writeln!(out, "## {} #{}", standings.game, best.puzzle_id)?;
            writeln!(out, "**{}: {} guesses**", best.player, best.guess_count)?;
            for score in &standings.entries[1..] {
                writeln!(out, "{}: {} guesses", score.player, score.guess_count)?;
            }
        }

        writeln!(out, "{STATS_HEADER}")?;
        writeln!(out, "{STATS_COLUMNS}")?;
        for stats in &self.players {
            writeln!(out, "{} | {} | {}", stats.player, stats.wins, stats.total)?;
        }
        Ok(())
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        self.write_body(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(game: Game, player: &str, guesses: u32) -> Score {
        Score::new(game, player, 100, 1_714_564_800, guesses)
    }

    #[test]
    fn empty_store_renders_headers_only() {
        let board = Leaderboard::from_scores(&[]);

        assert!(board.games.is_empty());
        assert!(board.winner().is_none());
        assert_eq!(
            board.render(),
            "# Current -dle game scores:\n## Current stats:\nPlayer | Wins | Total\n"
        );
    }

    #[test]
    fn best_score_is_highlighted_and_ranked_first() {
        let board = Leaderboard::from_scores(&[
            score(Game::Connections, "bob", 5),
            score(Game::Connections, "alice", 3),
        ]);

        assert_eq!(
            board.render(),
            "# Current -dle game scores:\n\
             ## Connections #100\n\
             **alice: 3 guesses**\n\
             bob: 5 guesses\n\
             ## Current stats:\n\
             Player | Wins | Total\n\
             alice | 1 | 1\n\
             bob | 0 | 1\n"
        );
    }

    #[test]
    fn games_follow_registry_order_and_skip_empty_ones() {
        let board = Leaderboard::from_scores(&[
            score(Game::Tradle, "alice", 2),
            score(Game::Connections, "bob", 4),
        ]);

        let games: Vec<Game> = board.games.iter().map(|g| g.game).collect();
        assert_eq!(games, vec![Game::Connections, Game::Tradle]);
        assert!(!board.render().contains("Yeardle"));
    }

    #[test]
    fn ties_go_to_earliest_submission() {
        let board = Leaderboard::from_scores(&[
            score(Game::Tradle, "carol", 3),
            score(Game::Tradle, "alice", 3),
            score(Game::Tradle, "bob", 2),
        ]);

        let order: Vec<&str> = board.games[0]
            .entries
            .iter()
            .map(|s| s.player.as_str())
            .collect();
        assert_eq!(order, vec!["bob", "carol", "alice"]);
    }

    #[test]
    fn tied_best_only_credits_first_sorted_entry() {
        let board = Leaderboard::from_scores(&[
            score(Game::Yeardle, "alice", 2),
            score(Game::Yeardle, "bob", 2),
        ]);

        assert_eq!(
            board.players,
            vec![
                PlayerStats {
                    player: "alice".to_string(),
                    wins: 1,
                    total: 1
                },
                PlayerStats {
                    player: "bob".to_string(),
                    wins: 0,
                    total: 1
                },
            ]
        );
    }

    #[test]
    fn stats_accumulate_across_games() {
        let board = Leaderboard::from_scores(&[
            score(Game::Connections, "alice", 4),
            score(Game::Connections, "bob", 3),
            score(Game::Yeardle, "alice", 5),
            score(Game::Yeardle, "bob", 1),
            score(Game::Tradle, "carol", 1),
            score(Game::Tradle, "alice", 6),
        ]);

        let winner = board.winner().unwrap();
        assert_eq!(winner.player, "bob");
        assert_eq!(winner.wins, 2);
        assert_eq!(winner.total, 2);

        let rows: Vec<(&str, u32, u32)> = board
            .players
            .iter()
            .map(|p| (p.player.as_str(), p.wins, p.total))
            .collect();
        assert_eq!(rows, vec![("bob", 2, 2), ("carol", 1, 1), ("alice", 0, 3)]);
    }

    #[test]
    fn equal_wins_keep_first_appearance_order() {
        let board = Leaderboard::from_scores(&[
            score(Game::Tradle, "dave", 5),
            score(Game::Connections, "erin", 2),
            score(Game::Tradle, "frank", 1),
        ]);

        let order: Vec<&str> = board.players.iter().map(|p| p.player.as_str()).collect();
        assert_eq!(order, vec!["erin", "frank", "dave"]);
    }

    #[test]
    fn header_shows_puzzle_id_of_best_entry() {
        let board = Leaderboard::from_scores(&[Score::new(Game::Tradle, "alice", 803, 0, 4)]);

        assert_eq!(board.games[0].best().unwrap().puzzle_id, 803);
        assert!(board.render().contains("## Tradle #803\n"));
    }
}
