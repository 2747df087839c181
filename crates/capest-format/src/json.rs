//! JSON output format.

use std::io::Write;

use crate::{FormatError, Formatter, OutputFormat, Report};

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    compact: bool,
}

impl JsonFormatter {
    /// Creates a pretty-printing JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { compact: false }
    }

    /// Sets whether to emit the document on a single line.
    #[must_use]
    pub const fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_report(&self, report: &Report, writer: &mut dyn Write) -> Result<(), FormatError> {
        if self.compact {
            serde_json::to_writer(&mut *writer, report)?;
        } else {
            serde_json::to_writer_pretty(&mut *writer, report)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}
