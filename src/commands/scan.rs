use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::checker::{DirectoryReport, SequenceChecker};
use crate::cli::Cli;
use crate::error::{Result, SeqGapError};
use crate::extract::Extractor;
use crate::gaps::SortOrder;
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter,
};
use crate::path_utils::{display_path, quote_path};
use crate::scanner::{DirectoryScanner, EntryScanner};
use crate::{EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

/// Validated settings for a scan run.
pub struct ScanOptions {
    pub checker: SequenceChecker,
    pub format: OutputFormat,
    pub color: ColorMode,
    pub verbose: u8,
    diagnostics: ErrorOutput,
}

impl ScanOptions {
    #[must_use]
    pub fn new(checker: SequenceChecker, format: OutputFormat, color: ColorMode, verbose: u8) -> Self {
        Self {
            checker,
            format,
            color,
            verbose,
            diagnostics: ErrorOutput::new(color),
        }
    }

    /// Builds options from parsed arguments, compiling the pattern.
    ///
    /// # Errors
    /// Returns an error if the regex is invalid or lacks the requested group.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let extractor = Extractor::new(&cli.regexp, cli.group)?;
        let checker = SequenceChecker::new(extractor, SortOrder::from_reverse(cli.reverse));
        Ok(Self::new(checker, cli.format, cli.color.into(), cli.verbose))
    }

    fn format_report(&self, report: &DirectoryReport) -> Result<String> {
        match self.format {
            OutputFormat::Text => TextFormatter::new(self.color).format(report),
            OutputFormat::Json => JsonFormatter.format(report),
        }
    }
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub directories: usize,
    pub with_gaps: usize,
    pub skipped: usize,
}

#[must_use]
pub fn run_scan(cli: &Cli) -> i32 {
    match run_scan_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_RUNTIME_ERROR
        }
    }
}

/// Runs the scan over the argument directories, or stdin lines when none
/// were given.
///
/// # Errors
/// Returns the first unrecoverable error; reports already written stay.
pub fn run_scan_impl(cli: &Cli) -> Result<i32> {
    let options = ScanOptions::from_cli(cli)?;
    let scanner = DirectoryScanner::new();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let summary = if cli.directories.is_empty() {
        let dirs = stdin_directories(io::stdin().lock());
        scan_directories(&options, &scanner, dirs, &mut stdout, &mut stderr)?
    } else {
        let dirs = cli.directories.iter().cloned().map(Ok);
        scan_directories(&options, &scanner, dirs, &mut stdout, &mut stderr)?
    };

    if options.verbose > 0 {
        options.diagnostics.write_info(
            &mut stderr,
            &format!(
                "{} director{} checked, {} with gaps, {} skipped",
                summary.directories,
                if summary.directories == 1 { "y" } else { "ies" },
                summary.with_gaps,
                summary.skipped
            ),
        );
    }

    Ok(EXIT_SUCCESS)
}

/// Directory paths from `reader`, one per line, trimmed; blank lines skipped.
pub fn stdin_directories<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) => {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| Ok(trimmed.to_string()))
        }
        Err(e) => Some(Err(e)),
    })
}

/// Checks each directory in turn, writing reports to `out` and diagnostics to
/// `diag`.
///
/// Directory access faults and directories without any sequence number are
/// reported and skipped. Any other error stops the run.
///
/// # Errors
/// Returns an error if reading `dirs` or writing `out` fails, or if an
/// extracted token is not an integer.
pub fn scan_directories<S, I, W, E>(
    options: &ScanOptions,
    scanner: &S,
    dirs: I,
    out: &mut W,
    diag: &mut E,
) -> Result<ScanSummary>
where
    S: EntryScanner,
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
    E: Write,
{
    let mut summary = ScanSummary::default();

    for dir in dirs {
        let dir = dir?;
        let path = Path::new(&dir);
        summary.directories += 1;

        match options.checker.check_directory(scanner, path) {
            Ok(report) if report.has_gaps() => {
                summary.with_gaps += 1;
                out.write_all(options.format_report(&report)?.as_bytes())?;
                out.flush()?;
            }
            Ok(report) => {
                if options.verbose > 0 {
                    options.diagnostics.write_info(
                        diag,
                        &format!(
                            "No gaps in {} ({} numbered entries)",
                            quote_path(&report.directory),
                            report.matched
                        ),
                    );
                }
            }
            Err(SeqGapError::EmptySequence) => {
                summary.skipped += 1;
                options.diagnostics.write_warning(
                    diag,
                    &format!(
                        "No sequence numbers found in {}",
                        quote_path(&display_path(path))
                    ),
                    None,
                    SeqGapError::EmptySequence.suggestion(),
                );
            }
            Err(e) if e.is_recoverable() => {
                summary.skipped += 1;
                options.diagnostics.write_seq_error(diag, &e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
