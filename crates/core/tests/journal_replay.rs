//! Journals written to disk must reproduce the exact run they recorded.

use std::fs;

use glide_core::{
    CourseBounds, Game, InputJournal, JOURNAL_FORMAT_VERSION, ReplayError, ScriptedPilot,
    replay_to_end,
};

const BOUNDS: CourseBounds = CourseBounds { height: 20, width: 80 };

/// Play the journal live and return the terminal state triple.
fn play_live(journal: &InputJournal) -> (i64, i64, u64) {
    let mut game = Game::new(journal.seed, journal.bounds);
    game.add_contestant(Box::new(ScriptedPilot::new(journal.tap_columns())));
    while !game.is_finished() {
        game.advance_frame();
    }
    (game.score(), game.current_x(), game.snapshot_hash())
}

#[test]
fn replay_reproduces_the_live_run_exactly() {
    let mut journal = InputJournal::new(555, BOUNDS);
    for x in [1, 4, 7, 12, 15, 18, 22, 25] {
        journal.record_tap(x);
    }

    let (score, x, hash) = play_live(&journal);
    let result = replay_to_end(&journal).expect("replay");
    assert_eq!(result.final_score, score);
    assert_eq!(result.final_x, x);
    assert_eq!(result.final_snapshot_hash, hash);
}

#[test]
fn journal_survives_a_disk_round_trip() {
    let mut journal = InputJournal::new(808, BOUNDS);
    journal.record_tap(5);
    journal.record_tap(9);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("run.journal.json");
    let encoded = serde_json::to_string_pretty(&journal).expect("serialize");
    fs::write(&path, encoded).expect("write journal");

    let raw = fs::read_to_string(&path).expect("read journal");
    let decoded: InputJournal = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(decoded, journal);

    let original = replay_to_end(&journal).expect("replay original");
    let restored = replay_to_end(&decoded).expect("replay restored");
    assert_eq!(original, restored);
}

#[test]
fn future_format_versions_are_refused() {
    let mut journal = InputJournal::new(1, BOUNDS);
    journal.format_version = JOURNAL_FORMAT_VERSION + 1;
    assert_eq!(
        replay_to_end(&journal),
        Err(ReplayError::UnsupportedFormat { format_version: JOURNAL_FORMAT_VERSION + 1 })
    );
}

#[test]
fn an_empty_journal_still_replays_to_a_deterministic_death() {
    let journal = InputJournal::new(31, BOUNDS);
    let first = replay_to_end(&journal).expect("replay");
    let second = replay_to_end(&journal).expect("replay");
    assert_eq!(first, second);
    assert_eq!(first.final_score, 0);
}
