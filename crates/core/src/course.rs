//! Deterministic course generation and the difficulty ramp.
//!
//! Obstacle geometry is derived from a seeded [`ChaCha8Rng`], so a seed
//! plus the recorded inputs fully determines a run.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::obstacle::{Obstacle, ObstacleDeque};
use crate::types::{CourseBounds, RampAspect};

/// Columns between consecutive obstacles at the start of a run.
const INITIAL_SPACING: i64 = 20;
/// The ramp never packs obstacles tighter than this.
const MIN_SPACING: i64 = 10;
/// Maximum gap-center drift between consecutive obstacles, in percent of
/// course height.
const INITIAL_DRIFT_BOUND: i32 = 10;
const MAX_DRIFT_BOUND: i32 = 40;
/// Frames over which the ramp probability climbs back to certainty.
const RAMP_PERIOD: u32 = 100;

pub struct CourseGen {
    rng: ChaCha8Rng,
    bounds: CourseBounds,
    spacing: i64,
    gap_height: i32,
    drift_bound: i32,
    ramp_tick: u32,
}

impl CourseGen {
    pub fn new(seed: u64, bounds: CourseBounds) -> Self {
        let gap_height = bounds.height - 2 * (bounds.height / 3);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            bounds,
            spacing: INITIAL_SPACING,
            gap_height,
            drift_bound: INITIAL_DRIFT_BOUND,
            ramp_tick: 0,
        }
    }

    pub fn spacing(&self) -> i64 {
        self.spacing
    }

    pub fn gap_height(&self) -> i32 {
        self.gap_height
    }

    /// Seed a queue with obstacles spanning the initially visible course.
    pub fn initial_obstacles(&mut self) -> ObstacleDeque {
        let mut obstacles = ObstacleDeque::new();
        let mut position = self.spacing;
        while position < self.bounds.width {
            let obstacle = self.next_obstacle(position, obstacles.back());
            obstacles.push_back(obstacle);
            position += self.spacing;
        }
        // One past the visible edge, so the front never runs dry.
        let beyond = self.next_obstacle(position, obstacles.back());
        obstacles.push_back(beyond);
        obstacles
    }

    /// Generate the obstacle at `position`, drifting its gap a bounded
    /// random amount from `previous` (or from a centered gap when there
    /// is no previous obstacle).
    pub fn next_obstacle(&mut self, position: i64, previous: Option<&Obstacle>) -> Obstacle {
        let height = self.bounds.height;
        let gap = self.gap_height;
        let previous_top = match previous {
            Some(obstacle) => obstacle.gap_top(),
            None => (height - gap) / 2,
        };

        let drift = self.rand_in(-self.drift_bound, self.drift_bound);
        let mut top = previous_top + drift * height / 100;
        if top + gap > height {
            top = height - gap;
        }
        if top < 0 {
            top = 0;
        }
        let bottom = height - top - gap;
        debug_assert_eq!(top + gap + bottom, height);

        Obstacle::new(position, top, gap, bottom)
    }

    /// Occasionally tighten one tuning knob. The chance rises the longer
    /// the course has gone without a ramp, reaching certainty after
    /// [`RAMP_PERIOD`] quiet frames.
    pub fn ramp(&mut self) -> Option<RampAspect> {
        let window = RAMP_PERIOD.saturating_sub(self.ramp_tick).max(1);
        if self.rand_in(0, window as i32 - 1) != 0 {
            self.ramp_tick += 1;
            return None;
        }
        self.ramp_tick = 0;

        let aspect = match self.rand_in(0, 2) {
            0 => {
                self.gap_height = (self.gap_height - 1).max(self.bounds.height / 6);
                RampAspect::GapShrunk
            }
            1 => {
                self.spacing = (self.spacing - 1).max(MIN_SPACING);
                RampAspect::SpacingShrunk
            }
            _ => {
                self.drift_bound = (self.drift_bound + 1).min(MAX_DRIFT_BOUND);
                RampAspect::DriftWidened
            }
        };
        Some(aspect)
    }

    /// Uniform draw in `[lo, hi]` inclusive.
    fn rand_in(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as u64;
        lo + (self.rng.next_u64() % span) as i32
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const BOUNDS: CourseBounds = CourseBounds { height: 30, width: 100 };

    #[test]
    fn same_seed_produces_the_same_course() {
        let left: Vec<_> = CourseGen::new(77, BOUNDS).initial_obstacles().iter().copied().collect();
        let right: Vec<_> =
            CourseGen::new(77, BOUNDS).initial_obstacles().iter().copied().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn initial_obstacles_are_strictly_ordered_and_cover_the_course() {
        let mut course = CourseGen::new(3, BOUNDS);
        let obstacles = course.initial_obstacles();
        assert!(!obstacles.is_empty());

        let mut previous: Option<i64> = None;
        for obstacle in &obstacles {
            if let Some(position) = previous {
                assert!(obstacle.position() > position, "positions must strictly increase");
            }
            previous = Some(obstacle.position());
        }
        let back = obstacles.back().expect("non-empty");
        assert!(back.position() >= BOUNDS.width, "queue must cover the visible width");
    }

    #[test]
    fn ramp_floors_and_caps_hold_after_many_ramps() {
        let mut course = CourseGen::new(9, BOUNDS);
        for _ in 0..10_000 {
            course.ramp();
        }
        assert!(course.gap_height() >= BOUNDS.height / 6);
        assert!(course.spacing() >= MIN_SPACING);
        assert!(course.drift_bound <= MAX_DRIFT_BOUND);
    }

    proptest! {
        #[test]
        fn generated_gaps_always_partition_the_course_height(seed in any::<u64>()) {
            let mut course = CourseGen::new(seed, BOUNDS);
            let mut previous = None;
            for position in (20..400).step_by(20) {
                let obstacle = course.next_obstacle(position, previous.as_ref());
                prop_assert_eq!(
                    obstacle.gap_top() + obstacle.gap_height() + obstacle.gap_bottom(),
                    BOUNDS.height
                );
                prop_assert!(obstacle.gap_top() >= 0);
                prop_assert!(obstacle.gap_bottom() >= 0);
                previous = Some(obstacle);
            }
        }
    }
}
