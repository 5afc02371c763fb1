use serde::{Deserialize, Serialize};

/// Fixed course dimensions, supplied at construction and constant for the
/// lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseBounds {
    /// Number of vertical rows; agents live in `[0, height - 1]`.
    pub height: i32,
    /// Number of visible columns kept populated with obstacles.
    pub width: i64,
}

/// The two discrete choices available to an agent each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Ascend,
    Fall,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContestantId(pub usize);

/// Which tuning knob a difficulty ramp tightened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampAspect {
    GapShrunk,
    SpacingShrunk,
    DriftWidened,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogEvent {
    ObstaclePassed { score: i64 },
    ContestantDied { id: ContestantId, score: i64 },
    DifficultyRamped { aspect: RampAspect },
    FrameSkippedEmptyQueue { x: i64 },
}
