#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the zone-report binary.
#[macro_export]
macro_rules! zone_report {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("zone-report"))
    };
}

/// Analytics data with traffic, security and geo populated.
pub const SAMPLE_DATA: &str = r#"{
    "traffic": {
        "requests": 1500000,
        "cached_requests": 600000,
        "bytes": 5368709120,
        "page_views": 42000,
        "timeseries": [
            { "timestamp": "2024-03-01T00:00:00Z", "requests": 500000, "bytes": 1073741824 },
            { "timestamp": "2024-03-01T08:00:00Z", "requests": 600000, "bytes": 2147483648 },
            { "timestamp": "2024-03-01T16:00:00Z", "requests": 400000, "bytes": 2147483648 }
        ]
    },
    "security": {
        "threats": 120,
        "blocked": 100,
        "challenged": 20,
        "threat_types": [
            { "name": "sqli", "count": 70 },
            { "name": "xss", "count": 50 }
        ]
    },
    "geo": {
        "countries": [
            { "country": "US", "requests": 900000, "threats": 80 },
            { "country": "DE", "requests": 600000, "threats": 40 }
        ]
    }
}"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes [`SAMPLE_DATA`] and returns its path.
    pub fn create_sample_data(&self) -> PathBuf {
        self.create_file("data.json", SAMPLE_DATA)
    }

    /// Files written into `relative_dir`, sorted.
    pub fn files_in(&self, relative_dir: &str) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.dir.path().join(relative_dir)) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
        files.sort();
        files
    }
}
