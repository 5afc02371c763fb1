use crate::agent::Agent;
use crate::obstacle::{ObstacleDeque, evict_passed};
use crate::types::{Action, CourseBounds};

/// Score of a branch confirmed dead. Never re-expanded.
pub(crate) const SCORE_DEAD: i32 = -1;
/// Score of an unexpanded leaf presumed alive past the horizon.
pub(crate) const SCORE_ALIVE: i32 = 1;

/// One hypothetical future in the retained lookahead tree.
///
/// A node holds the agent snapshot after stepping at column `x`. Its
/// `survival` score is `-1` for a confirmed dead end, `+1` for a
/// frontier leaf presumed alive past the horizon, and otherwise the sum
/// of both children's scores: the count of paths below it still alive
/// through the searched horizon. Summing (not maximizing) is deliberate;
/// it rewards futures with more surviving continuations.
#[derive(Clone, Debug, PartialEq)]
pub struct FutureTree {
    agent: Agent,
    x: i64,
    survival: i32,
    on_ascend: Option<Box<FutureTree>>,
    on_fall: Option<Box<FutureTree>>,
}

impl FutureTree {
    fn dead(agent: Agent, x: i64) -> Self {
        Self { agent, x, survival: SCORE_DEAD, on_ascend: None, on_fall: None }
    }

    fn horizon_leaf(agent: Agent, x: i64) -> Self {
        Self { agent, x, survival: SCORE_ALIVE, on_ascend: None, on_fall: None }
    }

    pub fn survival(&self) -> i32 {
        self.survival
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn on_ascend(&self) -> Option<&FutureTree> {
        self.on_ascend.as_deref()
    }

    pub fn on_fall(&self) -> Option<&FutureTree> {
        self.on_fall.as_deref()
    }

    /// A childless node whose branch already died. Must never be
    /// expanded again.
    pub fn is_dead_end(&self) -> bool {
        self.survival == SCORE_DEAD && self.on_ascend.is_none()
    }

    /// A childless node at the current search frontier, presumed alive.
    fn is_frontier_leaf(&self) -> bool {
        self.on_ascend.is_none() && !self.is_dead_end()
    }

    /// Root the tree at the live agent's current state and explore both
    /// immediate actions to the full horizon.
    pub fn root(
        agent: Agent,
        horizon: u32,
        bounds: CourseBounds,
        x: i64,
        obstacles: &ObstacleDeque,
    ) -> Self {
        let on_ascend =
            Self::build(agent.clone(), Action::Ascend, horizon, bounds, x + 1, obstacles.clone());
        let on_fall =
            Self::build(agent.clone(), Action::Fall, horizon, bounds, x + 1, obstacles.clone());
        let survival = on_ascend.survival + on_fall.survival;
        Self {
            agent,
            x,
            survival,
            on_ascend: Some(Box::new(on_ascend)),
            on_fall: Some(Box::new(on_fall)),
        }
    }

    /// Step `agent` with `action` at column `x` against a private copy
    /// of the queue, then explore `remaining` further levels.
    ///
    /// Collision makes a terminal dead node regardless of depth left;
    /// exhausting the horizon makes an optimism leaf, the candidate for
    /// later extension.
    pub fn build(
        mut agent: Agent,
        action: Action,
        remaining: u32,
        bounds: CourseBounds,
        x: i64,
        mut obstacles: ObstacleDeque,
    ) -> Self {
        agent.apply(action, bounds.height);
        evict_passed(&mut obstacles, x);

        if let Some(front) = obstacles.front()
            && front.collides(x, agent.y())
        {
            return Self::dead(agent, x);
        }
        if remaining == 0 {
            return Self::horizon_leaf(agent, x);
        }

        let on_ascend =
            Self::build(agent.clone(), Action::Ascend, remaining - 1, bounds, x + 1, obstacles.clone());
        let on_fall = Self::build(agent.clone(), Action::Fall, remaining - 1, bounds, x + 1, obstacles);
        let survival = on_ascend.survival + on_fall.survival;
        Self {
            agent,
            x,
            survival,
            on_ascend: Some(Box::new(on_ascend)),
            on_fall: Some(Box::new(on_fall)),
        }
    }

    /// Advance this subtree's frontier by exactly one level.
    ///
    /// Dead ends are left untouched (the pruning rule that bounds the
    /// amortized cost), frontier leaves grow one level from their stored
    /// snapshot, and internal nodes recurse into both children and
    /// recompute their sum.
    pub fn extend(&mut self, bounds: CourseBounds, x: i64, obstacles: &ObstacleDeque) {
        if self.is_dead_end() {
            return;
        }
        debug_assert_eq!(self.x, x, "extension must track the node's own column");

        if self.is_frontier_leaf() {
            let on_ascend =
                Self::build(self.agent.clone(), Action::Ascend, 0, bounds, x + 1, obstacles.clone());
            let on_fall =
                Self::build(self.agent.clone(), Action::Fall, 0, bounds, x + 1, obstacles.clone());
            self.survival = on_ascend.survival + on_fall.survival;
            self.on_ascend = Some(Box::new(on_ascend));
            self.on_fall = Some(Box::new(on_fall));
            return;
        }

        let Some(on_ascend) = self.on_ascend.as_deref_mut() else { return };
        let Some(on_fall) = self.on_fall.as_deref_mut() else { return };
        on_ascend.extend(bounds, x + 1, obstacles);
        on_fall.extend(bounds, x + 1, obstacles);
        self.survival = on_ascend.survival + on_fall.survival;
    }

    /// Descend into the chosen child, discarding this node and the
    /// sibling subtree — a future that will not occur.
    pub fn into_child(mut self, action: Action) -> Option<FutureTree> {
        let child = match action {
            Action::Ascend => self.on_ascend.take(),
            Action::Fall => self.on_fall.take(),
        };
        child.map(|boxed| *boxed)
    }
}
