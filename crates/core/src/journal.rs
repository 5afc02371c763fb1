//! Input journal: everything needed to reproduce a run byte-for-byte.
//!
//! A run is fully determined by its seed, its course bounds, and the
//! columns at which the human tapped. The journal records exactly that,
//! in a versioned serde-friendly shape.

use serde::{Deserialize, Serialize};

use crate::types::CourseBounds;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapRecord {
    pub x: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub bounds: CourseBounds,
    taps: Vec<TapRecord>,
}

impl InputJournal {
    pub fn new(seed: u64, bounds: CourseBounds) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, bounds, taps: Vec::new() }
    }

    /// Record a tap at column `x`. Columns arrive in frame order.
    pub fn record_tap(&mut self, x: i64) {
        debug_assert!(
            self.taps.last().is_none_or(|last| last.x < x),
            "taps must be recorded in ascending column order"
        );
        self.taps.push(TapRecord { x });
    }

    pub fn taps(&self) -> &[TapRecord] {
        &self.taps
    }

    pub fn tap_columns(&self) -> Vec<i64> {
        self.taps.iter().map(|tap| tap.x).collect()
    }
}
