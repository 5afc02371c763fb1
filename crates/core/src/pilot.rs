//! Decision sources ("pilots") steering an agent one frame at a time.
//!
//! A pilot is queried exactly once per physics update and answers a
//! single question: ascend now, or let gravity act. Implementations
//! range from a human tap latch to the incremental lookahead engine.

mod oneshot;
mod retained;
mod script;
mod tap;
mod tree;

pub use oneshot::{DEFAULT_ONESHOT_HORIZON, OneShotPilot};
pub use retained::{DEFAULT_RETAINED_HORIZON, RetainedPilot};
pub use script::ScriptedPilot;
pub use tap::{TapHandle, TapPilot};
pub use tree::FutureTree;

use crate::agent::Agent;
use crate::obstacle::ObstacleDeque;
use crate::types::CourseBounds;

/// A source of per-frame ascend/fall decisions.
///
/// `obstacles` is the live queue; implementations that simulate futures
/// must clone it into private timelines rather than mutate it.
pub trait Pilot {
    fn should_ascend(
        &mut self,
        agent: &Agent,
        bounds: CourseBounds,
        x: i64,
        obstacles: &ObstacleDeque,
    ) -> bool;
}
