use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqGapError {
    #[error("Cannot read directory '{}': {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("Capture group {group} does not exist in pattern '{pattern}' ({available} group(s) available)")]
    GroupOutOfRange {
        pattern: String,
        group: usize,
        available: usize,
    },

    #[error("Extracted token '{token}' is not an integer")]
    NonNumericToken { token: String },

    #[error("Extracted token '{token}' is too large (maximum is {})", u64::MAX)]
    TokenTooLarge { token: String },

    #[error("No sequence numbers to compare against")]
    EmptySequence,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SeqGapError {
    /// Short category label used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::DirectoryAccess { .. } => "Directory",
            Self::InvalidPattern { .. } | Self::GroupOutOfRange { .. } => "Pattern",
            Self::NonNumericToken { .. } | Self::TokenTooLarge { .. } | Self::EmptySequence => {
                "Sequence"
            }
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// Extra detail line, usually the underlying cause.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable help line, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::DirectoryAccess { source, .. } => match source.kind() {
                ErrorKind::NotFound => Some("Check that the path exists"),
                ErrorKind::NotADirectory => Some("Pass a directory, not a file"),
                ErrorKind::PermissionDenied => Some("Check read permissions on the directory"),
                _ => None,
            },
            Self::GroupOutOfRange { .. } => {
                Some("Each () in the regex is a group; --group 3 selects (\\d+) in (\\w)(-)(\\d+)")
            }
            Self::NonNumericToken { .. } => Some("The regex must capture an integer"),
            Self::TokenTooLarge { .. } => {
                Some("Narrow the regex with -e so it captures only the sequence number")
            }
            Self::EmptySequence => Some("No entry matched the regex"),
            Self::InvalidPattern { .. } | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Whether processing can move on to the next directory after this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::DirectoryAccess { .. } | Self::EmptySequence)
    }
}

pub type Result<T> = std::result::Result<T, SeqGapError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
