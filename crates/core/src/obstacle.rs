use crate::deque::Deque;

/// Rendered thickness of an obstacle, in course columns. Lookahead and
/// the live frame loop must use the same width or predicted death points
/// drift away from real ones.
pub const OBSTACLE_WIDTH: i64 = 3;

/// Columns an obstacle may trail behind the scroll position before it is
/// evicted from the queue.
pub const EVICTION_MARGIN: i64 = 2;

/// The live (and per-branch) obstacle queue, ordered by `position`
/// strictly increasing front-to-back.
pub type ObstacleDeque = Deque<Obstacle>;

/// A barrier pair with a passable gap. Immutable once created.
///
/// Vertical coordinates are rows from the top of the course: rows
/// `0..gap_top` are the upper barrier, rows `gap_top..gap_top +
/// gap_height` pass, everything below is the lower barrier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Obstacle {
    position: i64,
    gap_top: i32,
    gap_height: i32,
    gap_bottom: i32,
}

impl Obstacle {
    pub fn new(position: i64, gap_top: i32, gap_height: i32, gap_bottom: i32) -> Self {
        Self { position, gap_top, gap_height, gap_bottom }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn gap_top(&self) -> i32 {
        self.gap_top
    }

    pub fn gap_height(&self) -> i32 {
        self.gap_height
    }

    pub fn gap_bottom(&self) -> i32 {
        self.gap_bottom
    }

    /// True iff `(x, y)` lies inside either barrier of this obstacle.
    pub fn collides(&self, x: i64, y: i32) -> bool {
        if x < self.position || x >= self.position + OBSTACLE_WIDTH {
            return false;
        }
        y < self.gap_top || y >= self.gap_top + self.gap_height
    }
}

/// Drop obstacles whose trailing edge is more than [`EVICTION_MARGIN`]
/// columns behind `x`, returning how many were dropped.
pub(crate) fn evict_passed(obstacles: &mut ObstacleDeque, x: i64) -> u32 {
    let mut evicted = 0;
    while let Some(front) = obstacles.front() {
        if front.position() >= x - EVICTION_MARGIN {
            break;
        }
        obstacles.pop_front();
        evicted += 1;
    }
    evicted
}
