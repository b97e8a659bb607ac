use std::path::{Component, Path, PathBuf};

/// Absolute form of `path` for display.
///
/// Relative paths are joined onto the current directory, then `.` and `..`
/// components are folded lexically. Symlinks are not resolved and the path
/// does not need to exist.
#[must_use]
pub fn display_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize(&absolute)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op, matching `cd /..`
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Wraps a path in single quotes for report headers, escaping backslashes and
/// embedded single quotes.
#[must_use]
pub fn quote_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('\'');
    for ch in raw.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}
