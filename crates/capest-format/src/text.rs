//! Plain text output format.

use std::io::Write;

use crate::{FormatError, Formatter, OutputFormat, Report};

/// Text formatter: summary, tables, then the share query.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    share_query: bool,
}

impl TextFormatter {
    /// Creates a text formatter that prints the share query.
    #[must_use]
    pub const fn new() -> Self {
        Self { share_query: true }
    }

    /// Sets whether to print the share query after the tables.
    #[must_use]
    pub const fn with_share_query(mut self, share_query: bool) -> Self {
        self.share_query = share_query;
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_report(&self, report: &Report, writer: &mut dyn Write) -> Result<(), FormatError> {
        writeln!(writer, "{report}")?;
        for table in report.tables() {
            writeln!(writer)?;
            write!(writer, "{table}")?;
        }
        if self.share_query
            && let Some(query) = report.share_query()
        {
            writeln!(writer)?;
            writeln!(writer, "Share: ?{query}")?;
        }
        Ok(())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capest_storage::StorageEstimator;
    use chrono::NaiveDate;

    fn storage_report() -> Report {
        let start = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        StorageEstimator::default()
            .report_raw("1000", start)
            .unwrap()
            .into()
    }

    #[test]
    fn test_text_output() {
        let mut output = Vec::new();
        TextFormatter::new()
            .write_report(&storage_report(), &mut output)
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.starts_with("Storage Account Analysis:"));
        assert!(result.contains("Storage Configuration\n"));
        assert!(result.contains("Projected Storage Accounts\n"));
        assert!(result.contains("April 2027"));
        assert!(result.ends_with("Share: ?dailyVolumeTB=1000\n"));
    }

    #[test]
    fn test_without_share_query() {
        let mut output = Vec::new();
        TextFormatter::new()
            .with_share_query(false)
            .write_report(&storage_report(), &mut output)
            .unwrap();
        let result = String::from_utf8(output).unwrap();
        assert!(!result.contains("Share:"));
    }
}
