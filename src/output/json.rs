use crate::checker::DirectoryReport;
use crate::error::Result;

use super::ReportFormatter;

/// One compact JSON object per directory, so multi-directory runs read as
/// JSON Lines.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &DirectoryReport) -> Result<String> {
        let mut output = serde_json::to_string(report)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
