//! Core engine for glide: a scrolling obstacle-avoidance game.
//!
//! Everything here is deterministic and UI-free. A [`game::Game`]
//! owns a seeded course, an obstacle queue, and any number of
//! contestants, each steered by a [`pilot::Pilot`]; a recorded
//! [`journal::InputJournal`] replays a run exactly.

pub mod agent;
pub mod course;
pub mod deque;
pub mod game;
pub mod journal;
pub mod obstacle;
pub mod pilot;
pub mod replay;
pub mod types;

pub use agent::{Agent, GRAVITY, JUMP};
pub use course::CourseGen;
pub use deque::Deque;
pub use game::{Contestant, Game};
pub use journal::{InputJournal, JOURNAL_FORMAT_VERSION, TapRecord};
pub use obstacle::{OBSTACLE_WIDTH, Obstacle, ObstacleDeque};
pub use pilot::{
    DEFAULT_ONESHOT_HORIZON, DEFAULT_RETAINED_HORIZON, FutureTree, OneShotPilot, Pilot,
    RetainedPilot, ScriptedPilot, TapHandle, TapPilot,
};
pub use replay::{REPLAY_FRAME_BUDGET, ReplayError, ReplayResult, replay_to_end};
pub use types::{Action, ContestantId, CourseBounds, LogEvent, RampAspect};
