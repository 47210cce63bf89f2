use chrono::{DateTime, TimeZone, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use dlebot::{
    transport::{ChatEventHandler, ChatOutcome},
    Clock, JsonFileScoreRepository, ManualClock, ScoreboardService,
};

use super::mocks::MockMessageSink;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub const CHANNEL: &str = "dle-scores";

pub fn noon(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0).unwrap()
}

pub struct TestSetup {
    pub clock: Arc<ManualClock>,
    pub service: Arc<ScoreboardService>,
    pub chat: ChatEventHandler,
    pub sink: Arc<MockMessageSink>,
    pub data_file: PathBuf,
    pub _dir: Arc<TempDir>,
}

impl TestSetup {
    /// Posts a chat message as `player` and returns what happened to it
    pub async fn post(&self, player: &str, content: &str) -> ChatOutcome {
        self.chat
            .handle_chat_message(CHANNEL, player, content)
            .await
            .expect("chat message should be handled")
            .outcome
    }

    /// Starts a new process against the same score file
    pub async fn restart(&self) -> TestSetup {
        TestSetupBuilder::new()
            .starting_at(self.clock.now())
            .build_in(self._dir.clone())
            .await
    }
}

pub struct TestSetupBuilder {
    start: DateTime<Utc>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { start: noon(1) }
    }

    pub fn starting_at(mut self, start: DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    pub async fn build(self) -> TestSetup {
        let dir = Arc::new(TempDir::new().expect("temp dir"));
        self.build_in(dir).await
    }

    async fn build_in(self, dir: Arc<TempDir>) -> TestSetup {
        let data_file = dir.path().join("scores.json");
        let clock = Arc::new(ManualClock::new(self.start));
        let service = Arc::new(
            ScoreboardService::builder(Arc::new(JsonFileScoreRepository::new(&data_file)))
                .with_clock(clock.clone())
                .load()
                .await,
        );
        let sink = Arc::new(MockMessageSink::new());
        let chat = ChatEventHandler::new(service.clone(), sink.clone());

        TestSetup {
            clock,
            service,
            chat,
            sink,
            data_file,
            _dir: dir,
        }
    }
}
