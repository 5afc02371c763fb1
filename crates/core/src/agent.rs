use crate::types::Action;

/// Downward acceleration applied on every "fall" step, as a fraction of
/// course height per frame.
pub const GRAVITY: f64 = 0.04;
/// Upward speed an "ascend" step overrides the current speed with.
pub const JUMP: f64 = -0.08;

/// Ascend speed cap; stronger than the descend cap so ascending is the
/// powerful move.
const MAX_RISE_SPEED: f64 = 2.0 * JUMP;
/// Descend speed cap.
const MAX_DROP_SPEED: f64 = 3.0 * GRAVITY;

const UNPLACED: i32 = -1;
const UNSCORED: i64 = -1;

/// The vertically-moving entity subject to physics and collision.
///
/// There is no hidden shared state: `Clone` yields a fully independent
/// agent, which the lookahead engines step along hypothetical futures
/// without disturbing the live one.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    y: i32,
    vertical_speed: f64,
    alive: bool,
    final_score: i64,
}

impl Agent {
    pub fn new() -> Self {
        Self { y: UNPLACED, vertical_speed: 0.0, alive: true, final_score: UNSCORED }
    }

    /// Vertical row, or `-1` while the agent has not been placed.
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn vertical_speed(&self) -> f64 {
        self.vertical_speed
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Score recorded at death, or `-1` while alive.
    pub fn final_score(&self) -> i64 {
        self.final_score
    }

    /// Set the vertical position. Only the first placement takes effect;
    /// later calls are ignored.
    pub fn place(&mut self, y: i32) {
        if self.y == UNPLACED {
            self.y = y;
        }
    }

    /// Mark the agent dead and record its score. Idempotent: the first
    /// death wins.
    pub fn kill(&mut self, score: i64) {
        if self.alive {
            self.alive = false;
            self.final_score = score;
        }
    }

    /// One physics step.
    ///
    /// Ascend overrides the speed with [`JUMP`]; fall accumulates
    /// [`GRAVITY`]. Speed is clamped, the position advances by
    /// `speed * course_height` truncated to a row, and hitting either
    /// bound stops the agent there with zero speed (a bounce-stop, not a
    /// death; only collisions kill).
    pub fn apply(&mut self, action: Action, course_height: i32) {
        match action {
            Action::Ascend => self.vertical_speed = JUMP,
            Action::Fall => self.vertical_speed += GRAVITY,
        }
        self.vertical_speed = self.vertical_speed.clamp(MAX_RISE_SPEED, MAX_DROP_SPEED);

        self.y = (f64::from(self.y) + self.vertical_speed * f64::from(course_height)) as i32;

        let floor = course_height - 1;
        if self.y > floor {
            self.y = floor;
            self.vertical_speed = 0.0;
        }
        if self.y < 0 {
            self.y = 0;
            self.vertical_speed = 0.0;
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn placed_agent(y: i32) -> Agent {
        let mut agent = Agent::new();
        agent.place(y);
        agent
    }

    #[test]
    fn placement_is_set_once() {
        let mut agent = Agent::new();
        assert_eq!(agent.y(), -1);
        agent.place(10);
        agent.place(17);
        assert_eq!(agent.y(), 10);
    }

    #[test]
    fn repeated_falls_cap_at_three_gravities() {
        let mut agent = placed_agent(0);
        for _ in 0..50 {
            agent.apply(Action::Fall, 1000);
        }
        assert!(agent.vertical_speed() <= 3.0 * GRAVITY + 1e-12);
    }

    #[test]
    fn repeated_ascends_cap_at_two_jumps() {
        let mut agent = placed_agent(999);
        for _ in 0..50 {
            agent.apply(Action::Ascend, 1000);
        }
        assert!(agent.vertical_speed() >= 2.0 * JUMP - 1e-12);
    }

    #[test]
    fn hitting_the_floor_stops_the_agent_without_killing_it() {
        let mut agent = placed_agent(19);
        for _ in 0..10 {
            agent.apply(Action::Fall, 20);
        }
        assert_eq!(agent.y(), 19);
        assert_eq!(agent.vertical_speed(), 0.0);
        assert!(agent.is_alive());
    }

    #[test]
    fn hitting_the_ceiling_stops_the_agent() {
        let mut agent = placed_agent(0);
        agent.apply(Action::Ascend, 20);
        assert_eq!(agent.y(), 0);
        assert_eq!(agent.vertical_speed(), 0.0);
    }

    #[test]
    fn truncation_can_land_on_the_ceiling_without_engaging_the_clamp() {
        // From row 1 an ascend truncates to row 0 rather than crossing
        // it, so the speed carries over to the next step.
        let mut agent = placed_agent(1);
        agent.apply(Action::Ascend, 20);
        assert_eq!(agent.y(), 0);
        assert_eq!(agent.vertical_speed(), JUMP);
    }

    #[test]
    fn first_death_records_the_score_and_later_deaths_are_ignored() {
        let mut agent = placed_agent(5);
        assert_eq!(agent.final_score(), -1);
        agent.kill(42);
        agent.kill(77);
        assert!(!agent.is_alive());
        assert_eq!(agent.final_score(), 42);
    }

    proptest! {
        #[test]
        fn speed_stays_clamped_under_any_action_sequence(
            start_y in 0_i32..40,
            actions in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut agent = placed_agent(start_y);
            for ascend in actions {
                let action = if ascend { Action::Ascend } else { Action::Fall };
                agent.apply(action, 40);
                prop_assert!(agent.vertical_speed() >= 2.0 * JUMP - 1e-12);
                prop_assert!(agent.vertical_speed() <= 3.0 * GRAVITY + 1e-12);
                prop_assert!(agent.y() >= 0 && agent.y() < 40);
            }
        }
    }
}
