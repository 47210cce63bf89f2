use chrono::{DateTime, TimeDelta, Utc};
use strum_macros::Display;

use super::Score;

/// Scores older than this at validation time are refused
pub const FRESHNESS_WINDOW: TimeDelta = TimeDelta::hours(24);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    /// Recorded outside the trailing freshness window
    Stale,
    /// Same game, player and puzzle already stored
    Duplicate,
}

/// Store contents after accepting a candidate
#[derive(Debug, Clone, PartialEq)]
pub struct AdmissionPlan {
    pub scores: Vec<Score>,
    pub pruned: Vec<Score>,
}

/// Decides whether `candidate` joins `current`.
///
/// Freshness and duplicate checks look at the store as it is. Only an accepted
/// candidate prunes: every score of the same game with a lower puzzle id is
/// dropped, then the candidate is appended. `current` is never modified.
pub fn plan_admission(
    candidate: &Score,
    current: &[Score],
    now: DateTime<Utc>,
) -> Result<AdmissionPlan, RejectReason> {
    let cutoff = (now - FRESHNESS_WINDOW).timestamp();
    if candidate.timestamp < cutoff {
        return Err(RejectReason::Stale);
    }

    if current.iter().any(|score| score.same_entry(candidate)) {
        return Err(RejectReason::Duplicate);
    }

    let (pruned, mut scores): (Vec<Score>, Vec<Score>) = current
        .iter()
        .cloned()
        .partition(|score| score.game == candidate.game && score.puzzle_id < candidate.puzzle_id);

    scores.push(candidate.clone());

    Ok(AdmissionPlan { scores, pruned })
}
