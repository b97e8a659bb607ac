pub mod checker;
pub mod cli;
pub mod commands;
pub mod error;
pub mod extract;
pub mod gaps;
pub mod output;
pub mod path_utils;
pub mod scanner;

pub use checker::{DirectoryReport, SequenceChecker};
pub use error::{Result, SeqGapError};
pub use extract::Extractor;
pub use gaps::{SortOrder, find_gaps};
pub use scanner::{DirectoryScanner, EntryScanner, list_directory};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
