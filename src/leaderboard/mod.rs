// Ranking and report text built from a snapshot of stored scores.

mod standings;
mod summary;

pub use standings::{GameStandings, Leaderboard, PlayerStats};
pub use summary::{render_daily_summary, WinnerNote};
