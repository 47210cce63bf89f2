// Library crate for the -dle score bot
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod daily;
pub mod games;
pub mod leaderboard;
pub mod scores;
pub mod shared;
pub mod transport;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use daily::{Clock, DailyScheduler, ManualClock, SystemClock};
pub use games::Game;
pub use leaderboard::Leaderboard;
pub use scores::{
    Admission, InMemoryScoreRepository, JsonFileScoreRepository, RejectReason, Score,
    ScoreboardService,
};
pub use shared::{AppError, AppState};
pub use transport::{router, ChannelHub, ChatOutcome, MessageSink};
