//! Error, warning and info output for stderr, with color support.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi};
use crate::error::SeqGapError;

/// Diagnostic formatter for stderr.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a formatter with the given color mode, detecting on stderr.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    /// Creates a formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Prints `err` with its category, cause and help line.
    pub fn print_error(&self, err: &SeqGapError) {
        let mut stderr = std::io::stderr().lock();
        self.write_seq_error(&mut stderr, err);
    }

    /// Writes `err` using its `error_type`, `detail` and `suggestion`.
    pub fn write_seq_error<W: Write>(&self, w: &mut W, err: &SeqGapError) {
        let detail = err.detail();
        self.write_error(
            w,
            err.error_type(),
            &err.to_string(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    /// Writes an error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on the diagnostic stream are ignored.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_trailer(w, detail, suggestion);
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_trailer(w, detail, suggestion);
    }

    /// Writes a verbose-mode info line to a writer.
    pub fn write_info<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(w, "{}ℹ {message}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "ℹ {message}");
        }
    }

    fn write_trailer<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
