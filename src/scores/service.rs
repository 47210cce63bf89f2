use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use strum::IntoEnumIterator;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::daily::{Clock, SystemClock};
use crate::games::Game;
use crate::leaderboard::{render_daily_summary, Leaderboard, WinnerNote};

use super::{plan_admission, RejectReason, Score, ScoreRepository, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Accepted { pruned: usize },
    Rejected(RejectReason),
}

/// Owns the accepted scores and every change made to them.
///
/// Admissions hold the write lock across validate, persist and replace, so two
/// submissions never interleave. Renders work from a cloned snapshot.
pub struct ScoreboardService {
    scores: RwLock<Vec<Score>>,
    repository: Arc<dyn ScoreRepository>,
    clock: Arc<dyn Clock>,
    winner_note: Option<Arc<dyn WinnerNote>>,
    // Set once an admission has been saved; until then the store is not ours to rewrite
    dirty: AtomicBool,
}

impl ScoreboardService {
    pub fn builder(repository: Arc<dyn ScoreRepository>) -> ScoreboardServiceBuilder {
        ScoreboardServiceBuilder::new(repository)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    pub async fn try_admit(&self, candidate: Score) -> Result<Admission, StoreError> {
        let now = self.clock.now();
        let mut scores = self.scores.write().await;

        let plan = match plan_admission(&candidate, &scores, now) {
            Ok(plan) => plan,
            Err(reason) => {
                info!(
                    game = %candidate.game,
                    player = %candidate.player,
                    puzzle_id = candidate.puzzle_id,
                    %reason,
                    "Score rejected"
                );
                return Ok(Admission::Rejected(reason));
            }
        };

        for removed in &plan.pruned {
            debug!(
                game = %removed.game,
                player = %removed.player,
                puzzle_id = removed.puzzle_id,
                "Removing superseded score"
            );
        }

        // Persist first: a failed write must leave memory untouched
        self.repository.save(&plan.scores).await?;
        *scores = plan.scores;
        self.dirty.store(true, Ordering::Release);

        info!(
            game = %candidate.game,
            player = %candidate.player,
            puzzle_id = candidate.puzzle_id,
            guess_count = candidate.guess_count,
            pruned = plan.pruned.len(),
            "Score accepted"
        );

        Ok(Admission::Accepted {
            pruned: plan.pruned.len(),
        })
    }

    pub async fn scores(&self) -> Vec<Score> {
        self.scores.read().await.clone()
    }

    pub async fn leaderboard(&self) -> Leaderboard {
        Leaderboard::from_scores(&self.scores().await)
    }

    pub async fn render_leaderboard(&self) -> String {
        self.leaderboard().await.render()
    }

    pub async fn render_daily_summary(&self) -> String {
        let board = self.leaderboard().await;
        render_daily_summary(&board, self.winner_note.as_deref())
    }

    /// Writes the current scores out again, for use on shutdown.
    ///
    /// Does nothing until an admission has been saved, so a store that failed
    /// to load is left as it was found.
    pub async fn flush(&self) -> Result<(), StoreError> {
        let scores = self.scores.read().await;
        if !self.dirty.load(Ordering::Acquire) {
            debug!("No admissions since load, skipping flush");
            return Ok(());
        }
        self.repository.save(&scores).await
    }
}

/// Games whose stored scores span more than one puzzle id, with those ids in
/// first-seen order.
fn mixed_puzzle_games(scores: &[Score]) -> Vec<(Game, Vec<u32>)> {
    Game::iter()
        .filter_map(|game| {
            let mut ids: Vec<u32> = Vec::new();
            for score in scores.iter().filter(|score| score.game == game) {
                if !ids.contains(&score.puzzle_id) {
                    ids.push(score.puzzle_id);
                }
            }
            (ids.len() > 1).then_some((game, ids))
        })
        .collect()
}

pub struct ScoreboardServiceBuilder {
    repository: Arc<dyn ScoreRepository>,
    clock: Arc<dyn Clock>,
    winner_note: Option<Arc<dyn WinnerNote>>,
}

impl ScoreboardServiceBuilder {
    fn new(repository: Arc<dyn ScoreRepository>) -> Self {
        Self {
            repository,
            clock: Arc::new(SystemClock),
            winner_note: None,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_winner_note(mut self, winner_note: Arc<dyn WinnerNote>) -> Self {
        self.winner_note = Some(winner_note);
        self
    }

    /// Loads the stored scores and builds the service.
    ///
    /// A missing or unreadable store starts the service empty.
    pub async fn load(self) -> ScoreboardService {
        let scores = match self.repository.load().await {
            Ok(Some(scores)) => {
                info!(count = scores.len(), "Loaded stored scores");
                scores
            }
            Ok(None) => {
                info!("No stored scores, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "Failed to load stored scores, starting empty");
                Vec::new()
            }
        };

        for (game, ids) in mixed_puzzle_games(&scores) {
            warn!(%game, puzzle_ids = ?ids, "Multiple puzzle ids stored for the same game");
        }

        ScoreboardService {
            scores: RwLock::new(scores),
            repository: self.repository,
            clock: self.clock,
            winner_note: self.winner_note,
            dirty: AtomicBool::new(false),
        }
    }
}
