use crate::agent::Agent;
use crate::obstacle::ObstacleDeque;
use crate::pilot::Pilot;
use crate::pilot::tree::{FutureTree, SCORE_DEAD};
use crate::types::{Action, CourseBounds};

pub const DEFAULT_RETAINED_HORIZON: u32 = 15;

/// Incremental lookahead: a binary decision tree kept across frames.
///
/// On the first query the full tree is built to the horizon. Every
/// frame after that the frontier is pushed one level deeper, both
/// immediate branches are compared by survival score, and the tree is
/// re-rooted at the chosen child so only one step of fresh work is paid
/// per frame. Ties go to ascending.
pub struct RetainedPilot {
    horizon: u32,
    tree: Option<FutureTree>,
}

impl RetainedPilot {
    pub fn new() -> Self {
        Self { horizon: DEFAULT_RETAINED_HORIZON, tree: None }
    }

    pub fn with_horizon(horizon: u32) -> Self {
        Self { horizon, tree: None }
    }

    /// The retained subtree rooted at the last chosen branch, if any.
    pub fn tree(&self) -> Option<&FutureTree> {
        self.tree.as_ref()
    }
}

impl Default for RetainedPilot {
    fn default() -> Self {
        Self::new()
    }
}

impl Pilot for RetainedPilot {
    fn should_ascend(
        &mut self,
        agent: &Agent,
        bounds: CourseBounds,
        x: i64,
        obstacles: &ObstacleDeque,
    ) -> bool {
        let root = match self.tree.take() {
            Some(mut retained) => {
                retained.extend(bounds, x, obstacles);
                retained
            }
            None => FutureTree::root(agent.clone(), self.horizon, bounds, x, obstacles),
        };

        // A retained root from a previous frame always carries both
        // children; a missing child only happens on a dead root and
        // scores as dead.
        let ascend_score = root.on_ascend().map_or(SCORE_DEAD, FutureTree::survival);
        let fall_score = root.on_fall().map_or(SCORE_DEAD, FutureTree::survival);
        let ascend = ascend_score >= fall_score;

        let action = if ascend { Action::Ascend } else { Action::Fall };
        self.tree = root.into_child(action);
        ascend
    }
}
