use crate::agent::Agent;
use crate::obstacle::{ObstacleDeque, evict_passed};
use crate::pilot::Pilot;
use crate::types::{Action, CourseBounds};

pub const DEFAULT_ONESHOT_HORIZON: u32 = 20;

/// Fixed-depth OR-search rebuilt from scratch every frame.
///
/// The top level deliberately evaluates only the "ascend first" branch
/// and returns its OR-search outcome directly: it answers "does
/// ascending now keep at least one surviving path open over the
/// horizon", with no comparison against falling. All work is discarded
/// between frames; this is the stateless baseline the incremental
/// engine is measured against.
pub struct OneShotPilot {
    horizon: u32,
}

impl OneShotPilot {
    pub fn new() -> Self {
        Self { horizon: DEFAULT_ONESHOT_HORIZON }
    }

    pub fn with_horizon(horizon: u32) -> Self {
        Self { horizon }
    }
}

impl Default for OneShotPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Pilot for OneShotPilot {
    fn should_ascend(
        &mut self,
        agent: &Agent,
        bounds: CourseBounds,
        x: i64,
        obstacles: &ObstacleDeque,
    ) -> bool {
        survives(agent.clone(), Action::Ascend, self.horizon, bounds, x + 1, obstacles.clone())
    }
}

/// True iff stepping with `action` at column `x` leaves at least one
/// continuation alive through the remaining horizon. Survival along
/// either continuation is enough, hence the OR.
fn survives(
    mut agent: Agent,
    action: Action,
    remaining: u32,
    bounds: CourseBounds,
    x: i64,
    mut obstacles: ObstacleDeque,
) -> bool {
    agent.apply(action, bounds.height);
    evict_passed(&mut obstacles, x);

    if let Some(front) = obstacles.front()
        && front.collides(x, agent.y())
    {
        return false;
    }
    if remaining == 0 {
        return true;
    }

    survives(agent.clone(), Action::Ascend, remaining - 1, bounds, x + 1, obstacles.clone())
        || survives(agent, Action::Fall, remaining - 1, bounds, x + 1, obstacles)
}
