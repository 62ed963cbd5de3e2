//! Test helpers for composing payload and profile fixtures on disk.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use powline_core::ResortSignal;
use powline_core::test_support::ranked_signal;
use tempfile::TempDir;

/// Writes `bytes` to `path`, panicking on failure.
pub(super) fn write_utf8(path: &Utf8Path, bytes: &[u8]) {
    fs::write(path.as_std_path(), bytes).expect("write fixture file");
}

/// A temporary workspace holding JSON fixtures for one test.
pub(super) struct FixtureDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl FixtureDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Writes a conditions payload with the given resorts, returning its
    /// path.
    pub(super) fn write_payload(&self, resorts: &[ResortSignal]) -> Utf8PathBuf {
        let path = self.root.join("conditions.json");
        let payload = serde_json::json!({ "resorts": resorts });
        write_utf8(&path, payload.to_string().as_bytes());
        path
    }

    /// Writes raw profile JSON, returning its path.
    pub(super) fn write_profile(&self, json: &str) -> Utf8PathBuf {
        let path = self.root.join("profile.json");
        write_utf8(&path, json.as_bytes());
        path
    }
}

/// Three resorts whose neutral weekday scores are 8, 45, and 23 in
/// payload order monarch, berthoud, crested-butte.
pub(super) fn scored_resorts() -> Vec<ResortSignal> {
    vec![
        ranked_signal("monarch", 2.0, 60),
        ranked_signal("berthoud", 20.0, 30),
        ranked_signal("crested-butte", 10.0, 90),
    ]
}

/// A nearby maybe, a faraway storm, and a distant dud for sectioning tests.
pub(super) fn spread_resorts() -> Vec<ResortSignal> {
    vec![
        ranked_signal("eldora", 5.0, 30),
        ranked_signal("jackson-hole", 20.0, 120),
        ranked_signal("whistler", 2.0, 300),
    ]
}

/// A midweek, non-holiday date in the bundled season calendar's range.
pub(super) const WEDNESDAY: &str = "2026-01-14";
