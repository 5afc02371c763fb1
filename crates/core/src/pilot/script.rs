use crate::agent::Agent;
use crate::obstacle::ObstacleDeque;
use crate::pilot::Pilot;
use crate::types::CourseBounds;

/// Replays a recorded list of tap columns, in ascending order. Used by
/// journal replay and tests.
pub struct ScriptedPilot {
    taps: Vec<i64>,
    cursor: usize,
}

impl ScriptedPilot {
    pub fn new(taps: Vec<i64>) -> Self {
        Self { taps, cursor: 0 }
    }
}

impl Pilot for ScriptedPilot {
    fn should_ascend(
        &mut self,
        _agent: &Agent,
        _bounds: CourseBounds,
        x: i64,
        _obstacles: &ObstacleDeque,
    ) -> bool {
        while self.cursor < self.taps.len() && self.taps[self.cursor] < x {
            self.cursor += 1;
        }
        if self.taps.get(self.cursor) == Some(&x) {
            self.cursor += 1;
            return true;
        }
        false
    }
}
