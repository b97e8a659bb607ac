use std::fmt::Write;
use std::io::IsTerminal;

use crate::checker::DirectoryReport;
use crate::error::Result;
use crate::path_utils::quote_path;

use super::{ColorMode, ReportFormatter, ansi};

/// Plain-text report: a header naming the directory, then one value per line.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stdout().is_terminal()),
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &DirectoryReport) -> Result<String> {
        let mut output = String::new();
        let header = format!("Missing from {}:", quote_path(&report.directory));

        if self.use_colors {
            let _ = writeln!(output, "{}{header}{}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(output, "{header}");
        }

        for value in &report.missing {
            if self.use_colors {
                let _ = writeln!(output, "{}{value}{}", ansi::YELLOW, ansi::RESET);
            } else {
                let _ = writeln!(output, "{value}");
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
