//! Game outcome event and the score submission seam
//!
//! The core emits one [`GameOutcome`] per game end and hands it to an
//! [`OutcomeSink`] fire-and-forget: submission runs detached, its failure
//! is non-fatal, and the session's in-memory best score stays
//! authoritative either way. A persistence collaborator that later learns
//! a better remote best feeds it back through
//! [`GameSession::apply_best_score`](crate::sim::GameSession::apply_best_score).

use serde::{Deserialize, Serialize};

/// Emitted exactly once per game end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub final_score: u32,
    /// True when the final score beat the previous session best
    pub is_new_record: bool,
}

/// Where finished games go. Implementations must not block; anything
/// slow (network, disk) belongs on the far side of a channel or spawned
/// task owned by the collaborator.
pub trait OutcomeSink {
    fn submit(&mut self, outcome: &GameOutcome);
}

/// Default sink: just logs the result
#[derive(Debug, Default)]
pub struct LogSink;

impl OutcomeSink for LogSink {
    fn submit(&mut self, outcome: &GameOutcome) {
        log::info!(
            "submitting score {} (record: {})",
            outcome.final_score,
            outcome.is_new_record
        );
    }
}

/// Discards outcomes; for embedders that handle scores elsewhere
#[derive(Debug, Default)]
pub struct NullSink;

impl OutcomeSink for NullSink {
    fn submit(&mut self, _outcome: &GameOutcome) {}
}
