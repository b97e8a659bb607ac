use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, SeqGapError};

/// Trait for producing the raw entry names of a directory.
pub trait EntryScanner {
    /// List the names of the direct children of `dir`.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, dir: &Path) -> Result<Vec<String>>;
}

/// Lists directory children from the filesystem without recursing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryScanner;

impl DirectoryScanner {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EntryScanner for DirectoryScanner {
    fn scan(&self, dir: &Path) -> Result<Vec<String>> {
        list_directory(dir)
    }
}

/// Names of the files and subdirectories directly inside `dir`, hidden ones
/// included, sorted by name.
///
/// # Errors
/// Returns `DirectoryAccess` if `dir` does not exist, is not a directory, or
/// cannot be read.
pub fn list_directory(dir: &Path) -> Result<Vec<String>> {
    let access_error = |source: std::io::Error| SeqGapError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    // walkdir silently yields nothing for a file root at min_depth 1
    let metadata = fs::metadata(dir).map_err(access_error)?;
    if !metadata.is_dir() {
        return Err(access_error(std::io::Error::new(
            ErrorKind::NotADirectory,
            "Not a directory",
        )));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| access_error(walk_error_to_io(e)))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

fn walk_error_to_io(err: walkdir::Error) -> std::io::Error {
    let message = err.to_string();
    err.into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
