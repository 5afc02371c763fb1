//! Deterministic re-execution of a recorded run.

use std::fmt;

use crate::game::Game;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};
use crate::pilot::ScriptedPilot;

/// Upper bound on replayed frames, against corrupt or endless journals.
pub const REPLAY_FRAME_BUDGET: u64 = 1_000_000;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    UnsupportedFormat { format_version: u16 },
    FrameBudgetExhausted,
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { format_version } => {
                write!(
                    f,
                    "unsupported journal format {format_version} (expected {JOURNAL_FORMAT_VERSION})"
                )
            }
            Self::FrameBudgetExhausted => {
                write!(f, "replay did not finish within {REPLAY_FRAME_BUDGET} frames")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_score: i64,
    pub final_x: i64,
    pub final_snapshot_hash: u64,
}

/// Re-run a journal to completion with a single scripted contestant.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat { format_version: journal.format_version });
    }

    let mut game = Game::new(journal.seed, journal.bounds);
    game.add_contestant(Box::new(ScriptedPilot::new(journal.tap_columns())));

    let mut frames = 0u64;
    while !game.is_finished() {
        if frames >= REPLAY_FRAME_BUDGET {
            return Err(ReplayError::FrameBudgetExhausted);
        }
        game.advance_frame();
        frames += 1;
    }

    Ok(ReplayResult {
        final_score: game.score(),
        final_x: game.current_x(),
        final_snapshot_hash: game.snapshot_hash(),
    })
}
