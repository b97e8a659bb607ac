pub mod scan;

pub use scan::{ScanOptions, ScanSummary, run_scan, run_scan_impl, scan_directories, stdin_directories};
