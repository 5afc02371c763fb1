//! On-disk persistence for input journals.

use std::fs;
use std::io;
use std::path::Path;

use glide_core::InputJournal;

/// Write the journal atomically: serialize to a sibling temp file, then
/// rename over the target.
pub fn write_atomic(journal: &InputJournal, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(journal).map_err(io::Error::other)?;

    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

pub fn load(path: &Path) -> io::Result<InputJournal> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::CourseBounds;
    use tempfile::tempdir;

    #[test]
    fn atomic_write_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.journal.json");

        let mut journal = InputJournal::new(99, CourseBounds { height: 20, width: 80 });
        journal.record_tap(3);
        journal.record_tap(8);

        write_atomic(&journal, &path).unwrap();
        assert!(path.exists());

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, journal);

        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn loading_garbage_reports_invalid_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.journal.json");
        fs::write(&path, "not json").unwrap();

        let err = load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
