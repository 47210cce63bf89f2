use std::fmt::Write;

use super::{Leaderboard, PlayerStats};

/// Extra line appended under the winner announcement.
///
/// Nothing is registered by default.
pub trait WinnerNote: Send + Sync {
    fn note(&self, winner: &PlayerStats) -> Option<String>;
}

pub fn render_daily_summary(board: &Leaderboard, note: Option<&dyn WinnerNote>) -> String {
    let mut out = String::new();
    out.push_str("# Today's -dle game results:\n");
    out.push_str("## Today's winner:\n");

    match board.winner() {
        Some(winner) => {
            let _ = writeln!(out, "**{}** with {} wins", winner.player, winner.wins);
            if let Some(extra) = note.and_then(|note| note.note(winner)) {
                out.push_str(&extra);
                if !extra.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
        None => out.push_str("No scores were posted today.\n"),
    }

    let _ = board.write_body(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::Game;
    use crate::scores::Score;

    struct Congratulate;

    impl WinnerNote for Congratulate {
        fn note(&self, winner: &PlayerStats) -> Option<String> {
            Some(format!("Well played, {}!", winner.player))
        }
    }

    fn board() -> Leaderboard {
        Leaderboard::from_scores(&[
            Score::new(Game::Connections, "alice", 412, 0, 3),
            Score::new(Game::Connections, "bob", 412, 0, 5),
        ])
    }

    #[test]
    fn announces_winner_then_full_leaderboard_body() {
        assert_eq!(
            render_daily_summary(&board(), None),
            "# Today's -dle game results:\n\
             ## Today's winner:\n\
             **alice** with 1 wins\n\
             ## Connections #412\n\
             **alice: 3 guesses**\n\
             bob: 5 guesses\n\
             ## Current stats:\n\
             Player | Wins | Total\n\
             alice | 1 | 1\n\
             bob | 0 | 1\n"
        );
    }

    #[test]
    fn winner_note_follows_announcement() {
        let summary = render_daily_summary(&board(), Some(&Congratulate));
        assert!(summary.contains("**alice** with 1 wins\nWell played, alice!\n## Connections"));
    }

    #[test]
    fn empty_day_has_no_winner() {
        let summary = render_daily_summary(&Leaderboard::from_scores(&[]), Some(&Congratulate));

        assert!(summary.contains("No scores were posted today."));
        assert!(!summary.contains("Well played"));
        assert!(summary.ends_with("Player | Wins | Total\n"));
    }
}
