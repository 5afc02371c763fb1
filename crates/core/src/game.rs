//! The live run: one scrolling course shared by any number of
//! contestants, advanced one column per frame.

use xxhash_rust::xxh3::Xxh3;

use crate::agent::Agent;
use crate::course::CourseGen;
use crate::obstacle::{ObstacleDeque, evict_passed};
use crate::pilot::Pilot;
use crate::types::{Action, ContestantId, CourseBounds, LogEvent};

/// One agent plus the pilot steering it.
pub struct Contestant {
    id: ContestantId,
    agent: Agent,
    pilot: Box<dyn Pilot>,
}

impl Contestant {
    pub fn id(&self) -> ContestantId {
        self.id
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }
}

pub struct Game {
    seed: u64,
    bounds: CourseBounds,
    x: i64,
    score: i64,
    course: CourseGen,
    obstacles: ObstacleDeque,
    contestants: Vec<Contestant>,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(seed: u64, bounds: CourseBounds) -> Self {
        let mut course = CourseGen::new(seed, bounds);
        let obstacles = course.initial_obstacles();
        Self {
            seed,
            bounds,
            x: 0,
            score: 0,
            course,
            obstacles,
            contestants: Vec::new(),
            log: Vec::new(),
        }
    }

    /// Register a contestant, placed at mid-height of the course.
    pub fn add_contestant(&mut self, pilot: Box<dyn Pilot>) -> ContestantId {
        let id = ContestantId(self.contestants.len());
        let mut agent = Agent::new();
        agent.place(self.bounds.height / 2);
        self.contestants.push(Contestant { id, agent, pilot });
        id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn bounds(&self) -> CourseBounds {
        self.bounds
    }

    pub fn current_x(&self) -> i64 {
        self.x
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn contestants(&self) -> &[Contestant] {
        &self.contestants
    }

    pub fn obstacles(&self) -> &ObstacleDeque {
        &self.obstacles
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Drain the event log accumulated since the last call.
    pub fn take_log(&mut self) -> Vec<LogEvent> {
        std::mem::take(&mut self.log)
    }

    /// The run ends once every contestant is dead.
    pub fn is_finished(&self) -> bool {
        !self.contestants.is_empty() && self.contestants.iter().all(|c| !c.agent.is_alive())
    }

    /// Advance the world by one column.
    ///
    /// Order matters: ramp difficulty, replenish the far edge, evict and
    /// score passed obstacles, then step every live contestant and test
    /// it against the column it lands in. The viewport column only
    /// advances when an obstacle was actually in play.
    pub fn advance_frame(&mut self) {
        if self.is_finished() {
            return;
        }

        if let Some(aspect) = self.course.ramp() {
            self.log.push(LogEvent::DifficultyRamped { aspect });
        }
        self.replenish();

        let evicted = evict_passed(&mut self.obstacles, self.x);
        for _ in 0..evicted {
            self.score += 1;
            self.log.push(LogEvent::ObstaclePassed { score: self.score });
        }

        let Some(front) = self.obstacles.front().copied() else {
            self.log.push(LogEvent::FrameSkippedEmptyQueue { x: self.x });
            return;
        };

        let bounds = self.bounds;
        let x = self.x;
        let score = self.score;
        for contestant in &mut self.contestants {
            if !contestant.agent.is_alive() {
                continue;
            }
            let ascend = contestant.pilot.should_ascend(&contestant.agent, bounds, x, &self.obstacles);
            let action = if ascend { Action::Ascend } else { Action::Fall };
            contestant.agent.apply(action, bounds.height);
            if front.collides(x + 1, contestant.agent.y()) {
                contestant.agent.kill(score);
                self.log.push(LogEvent::ContestantDied { id: contestant.id, score });
            }
        }

        self.x += 1;
    }

    /// Keep the queue topped up one spacing past the right edge of the
    /// viewport.
    fn replenish(&mut self) {
        loop {
            let back = self.obstacles.back().copied();
            let next_position = match back {
                Some(obstacle) => obstacle.position() + self.course.spacing(),
                None => self.x + self.course.spacing(),
            };
            if next_position > self.x + self.bounds.width {
                break;
            }
            let next = self.course.next_obstacle(next_position, back.as_ref());
            self.obstacles.push_back(next);
        }
    }

    /// Order-independent digest of the observable run state. Two runs
    /// with the same seed and inputs must agree on this at every frame.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(&self.x.to_le_bytes());
        hasher.update(&self.score.to_le_bytes());
        for contestant in &self.contestants {
            hasher.update(&contestant.agent.y().to_le_bytes());
            hasher.update(&contestant.agent.vertical_speed().to_bits().to_le_bytes());
            hasher.update(&[u8::from(contestant.agent.is_alive())]);
            hasher.update(&contestant.agent.final_score().to_le_bytes());
        }
        for obstacle in &self.obstacles {
            hasher.update(&obstacle.position().to_le_bytes());
            hasher.update(&obstacle.gap_top().to_le_bytes());
            hasher.update(&obstacle.gap_height().to_le_bytes());
        }
        hasher.digest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pilot::ScriptedPilot;

    const BOUNDS: CourseBounds = CourseBounds { height: 20, width: 80 };

    fn falling_game(seed: u64) -> Game {
        let mut game = Game::new(seed, BOUNDS);
        game.add_contestant(Box::new(ScriptedPilot::new(Vec::new())));
        game
    }

    #[test]
    fn new_game_seeds_the_visible_course() {
        let game = Game::new(7, BOUNDS);
        assert!(!game.obstacles().is_empty());
        let positions: Vec<i64> = game.obstacles().iter().map(|o| o.position()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn contestants_start_at_mid_height_and_alive() {
        let mut game = Game::new(7, BOUNDS);
        let id = game.add_contestant(Box::new(ScriptedPilot::new(Vec::new())));
        let contestant = &game.contestants()[id.0];
        assert_eq!(contestant.agent().y(), 10);
        assert!(contestant.agent().is_alive());
    }

    #[test]
    fn run_finishes_once_every_contestant_dies() {
        let mut game = falling_game(3);
        for _ in 0..10_000 {
            if game.is_finished() {
                break;
            }
            game.advance_frame();
        }
        assert!(game.is_finished());
        let contestant = &game.contestants()[0];
        assert!(!contestant.agent().is_alive());
        assert!(contestant.agent().final_score() >= 0);
    }

    #[test]
    fn frames_after_the_run_ends_change_nothing() {
        let mut game = falling_game(3);
        while !game.is_finished() {
            game.advance_frame();
        }
        let frozen_x = game.current_x();
        let frozen_hash = game.snapshot_hash();
        game.advance_frame();
        assert_eq!(game.current_x(), frozen_x);
        assert_eq!(game.snapshot_hash(), frozen_hash);
    }

    #[test]
    fn score_counts_evicted_obstacles() {
        let mut game = falling_game(11);
        let mut last_score = 0;
        for _ in 0..200 {
            if game.is_finished() {
                break;
            }
            game.advance_frame();
            assert!(game.score() >= last_score);
            last_score = game.score();
        }
        for event in game.log() {
            if let LogEvent::ObstaclePassed { score } = event {
                assert!(*score > 0);
            }
        }
    }

    #[test]
    fn queue_never_runs_dry_during_a_run() {
        let mut game = falling_game(5);
        for _ in 0..500 {
            if game.is_finished() {
                break;
            }
            game.advance_frame();
            assert!(!game.obstacles().is_empty());
        }
    }
}
