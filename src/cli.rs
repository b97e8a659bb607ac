use clap::{Parser, ValueEnum};

use crate::extract::{DEFAULT_GROUP, DEFAULT_PATTERN};
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "seq-gap")]
#[command(author, version, about = "Detect missing numbers in sequentially numbered files")]
#[command(long_about = "Detect missing portions of a numbered sequence in directory listings.\n\n\
    Each entry name is matched against a regex; the chosen capture group is read as an \
    integer and every number from 1 to the largest one found that has no entry is printed.\n\n\
    Directories are taken from the arguments, or one per line from standard input.\n\n\
    Exit codes:\n  \
    0 - All directories processed\n  \
    2 - Invalid pattern, non-integer capture, or I/O failure")]
pub struct Cli {
    /// Directories to check (read from stdin, one per line, if omitted)
    pub directories: Vec<String>,

    /// Regex used to find the sequence number in each entry name
    #[arg(short = 'e', long = "regexp", default_value = DEFAULT_PATTERN)]
    pub regexp: String,

    /// Capture group holding the number; --group 3 selects (\d+) in (\w)(-)(\d+)
    #[arg(short, long, default_value_t = DEFAULT_GROUP)]
    pub group: usize,

    /// List missing numbers in descending order
    #[arg(short, long)]
    pub reverse: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase diagnostic output on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
