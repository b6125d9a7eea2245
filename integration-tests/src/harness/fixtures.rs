use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Absolute path of a file under `integration-tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// A log file in its own temporary directory, removed on drop.
pub struct TempLog {
    _dir: TempDir,
    path: PathBuf,
}

impl TempLog {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("access.log");
        fs::write(&path, contents).expect("failed to write temp log");
        Self { _dir: dir, path }
    }

    /// One `year:month:day:hour` line per hour in `hours`, all on 2023-02-01.
    pub fn with_hours(hours: &[u8]) -> Self {
        let contents: String = hours
            .iter()
            .map(|h| format!("2023:02:01:{h:02}\n"))
            .collect();
        Self::new(&contents)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
