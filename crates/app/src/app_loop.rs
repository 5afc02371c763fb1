//! Frame pacing and mode handling for the interactive loop, kept free of
//! rendering so it can be tested headlessly.

use glide_core::{Game, InputJournal, TapHandle};

/// Seconds between physics frames at score zero.
pub const BASE_FRAME_DELAY: f64 = 0.150;
/// The pace never drops below this, however high the score climbs.
pub const MIN_FRAME_DELAY: f64 = 0.020;
/// Seconds shaved off the delay per point scored.
pub const DELAY_SHRINK_PER_POINT: f64 = 0.001;

/// The run speeds up as the score climbs, down to a floor.
pub fn frame_delay(score: i64) -> f64 {
    (BASE_FRAME_DELAY - DELAY_SHRINK_PER_POINT * score as f64).max(MIN_FRAME_DELAY)
}

/// One rendered frame's worth of decoded input.
#[derive(Default, Clone, Copy)]
pub struct FrameInput {
    pub tap: bool,
    pub toggle_pause: bool,
    pub restart: bool,
    pub quit: bool,
}

#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub enum AppMode {
    #[default]
    Running,
    Paused,
    Finished,
}

pub struct AppState {
    pub mode: AppMode,
    last_step: f64,
}

impl AppState {
    pub fn new(now: f64) -> Self {
        Self { mode: AppMode::Running, last_step: now }
    }

    /// Process one rendered frame at wall-clock time `now`.
    ///
    /// Taps latch into `tap_handle` and are journaled at the column the
    /// next physics step will consume them at; a double tap between
    /// steps collapses to one recorded tap, matching what the pilot
    /// sees.
    pub fn tick(
        &mut self,
        game: &mut Game,
        tap_handle: &TapHandle,
        journal: &mut InputJournal,
        input: FrameInput,
        now: f64,
    ) {
        match self.mode {
            AppMode::Running => {
                if input.toggle_pause {
                    self.mode = AppMode::Paused;
                    return;
                }
                if input.tap && tap_handle.press() {
                    journal.record_tap(game.current_x());
                }
                if now - self.last_step >= frame_delay(game.score()) {
                    game.advance_frame();
                    self.last_step = now;
                    if game.is_finished() {
                        self.mode = AppMode::Finished;
                    }
                }
            }
            AppMode::Paused => {
                if input.toggle_pause {
                    self.mode = AppMode::Running;
                    self.last_step = now;
                }
            }
            AppMode::Finished => {}
        }
    }
}
