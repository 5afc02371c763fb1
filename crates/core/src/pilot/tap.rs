use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::agent::Agent;
use crate::obstacle::ObstacleDeque;
use crate::pilot::Pilot;
use crate::types::CourseBounds;

/// Human-input pilot: a shared latch the input side presses, consumed
/// with read-and-clear semantics once per physics update.
pub struct TapPilot {
    pressed: Arc<AtomicBool>,
}

/// Press side of a [`TapPilot`]. Cheap to clone and safe to call from an
/// input thread.
#[derive(Clone)]
pub struct TapHandle {
    pressed: Arc<AtomicBool>,
}

impl TapPilot {
    pub fn with_handle() -> (Self, TapHandle) {
        let pressed = Arc::new(AtomicBool::new(false));
        (Self { pressed: Arc::clone(&pressed) }, TapHandle { pressed })
    }
}

impl TapHandle {
    /// Latch a tap. Returns true if this press newly set the latch,
    /// false if a press was already pending.
    pub fn press(&self) -> bool {
        !self.pressed.swap(true, Ordering::Relaxed)
    }
}

impl Pilot for TapPilot {
    fn should_ascend(
        &mut self,
        _agent: &Agent,
        _bounds: CourseBounds,
        _x: i64,
        _obstacles: &ObstacleDeque,
    ) -> bool {
        self.pressed.swap(false, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pilot: &mut TapPilot) -> bool {
        let agent = Agent::new();
        let bounds = CourseBounds { height: 20, width: 80 };
        pilot.should_ascend(&agent, bounds, 0, &ObstacleDeque::new())
    }

    #[test]
    fn a_press_is_consumed_exactly_once() {
        let (mut pilot, handle) = TapPilot::with_handle();
        assert!(!query(&mut pilot));

        assert!(handle.press());
        assert!(query(&mut pilot));
        assert!(!query(&mut pilot));
    }

    #[test]
    fn double_press_before_a_frame_collapses_to_one_tap() {
        let (mut pilot, handle) = TapPilot::with_handle();
        assert!(handle.press());
        assert!(!handle.press());
        assert!(query(&mut pilot));
        assert!(!query(&mut pilot));
    }
}
