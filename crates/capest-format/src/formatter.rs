//! Output format abstraction.

use std::io::Write;

use thiserror::Error;

use crate::Report;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Summary text followed by aligned tables.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    /// Returns the format name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Json]
    }

    /// Returns the formatter for this format.
    #[must_use]
    pub fn formatter(&self) -> Box<dyn Formatter> {
        match self {
            Self::Text => Box::new(crate::TextFormatter::new()),
            Self::Json => Box::new(crate::JsonFormatter::new()),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "table" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for report formatters.
pub trait Formatter: Send + Sync {
    /// Writes a report to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_report(&self, report: &Report, writer: &mut dyn Write) -> Result<(), FormatError>;

    /// Returns the format this formatter produces.
    fn format(&self) -> OutputFormat;
}
