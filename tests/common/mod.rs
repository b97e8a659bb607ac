#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the seq-gap binary.
#[macro_export]
macro_rules! seq_gap {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("seq-gap"))
    };
}

/// Temporary directory tree of numbered files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates an empty file at `relative_path`, parents included.
    pub fn touch(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, "").expect("Failed to write file");
    }

    /// Creates every file in `names` inside `subdir` and returns its path.
    pub fn create_sequence(&self, subdir: &str, names: &[&str]) -> PathBuf {
        fs::create_dir_all(self.dir.path().join(subdir)).expect("Failed to create directory");
        for name in names {
            self.touch(&format!("{subdir}/{name}"));
        }
        self.dir.path().join(subdir)
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Header line printed above the missing values of `dir`.
pub fn header(dir: &Path) -> String {
    format!("Missing from '{}':", dir.display())
}
