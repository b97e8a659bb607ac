use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::extract::Extractor;
use crate::gaps::{SortOrder, find_gaps};
use crate::path_utils::display_path;
use crate::scanner::EntryScanner;

/// Outcome of checking one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryReport {
    /// Absolute path of the directory, as displayed.
    pub directory: PathBuf,
    /// Number of distinct sequence tokens found.
    #[serde(skip)]
    pub matched: usize,
    /// Missing values, zero-padded and in the requested order.
    pub missing: Vec<String>,
}

impl DirectoryReport {
    #[must_use]
    pub fn has_gaps(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Runs extraction and gap detection over names or directories.
#[derive(Debug, Clone, Default)]
pub struct SequenceChecker {
    extractor: Extractor,
    order: SortOrder,
}

impl SequenceChecker {
    #[must_use]
    pub const fn new(extractor: Extractor, order: SortOrder) -> Self {
        Self { extractor, order }
    }

    #[must_use]
    pub const fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Missing values for an in-memory list of names.
    ///
    /// # Errors
    /// Returns `EmptySequence` if no name matches, and `NonNumericToken` or
    /// `TokenTooLarge` if a captured token is not a `u64`.
    pub fn check_names<I, S>(&self, names: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = self.extractor.extract(names);
        find_gaps(&tokens, self.order)
    }

    /// Lists `dir` through `scanner` and reports its missing values.
    ///
    /// # Errors
    /// Returns the scanner's error when the directory cannot be listed, plus
    /// the errors of [`Self::check_names`].
    pub fn check_directory<S: EntryScanner>(
        &self,
        scanner: &S,
        dir: &Path,
    ) -> Result<DirectoryReport> {
        let names = scanner.scan(dir)?;
        let tokens = self.extractor.extract(&names);
        let missing = find_gaps(&tokens, self.order)?;

        Ok(DirectoryReport {
            directory: display_path(dir),
            matched: tokens.len(),
            missing,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
