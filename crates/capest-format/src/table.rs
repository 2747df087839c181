//! Plain tables with status-marked cells.

use std::fmt;

use capest_types::CapacityStatus;
use serde::Serialize;

/// One table cell, optionally carrying a capacity status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Display text.
    pub text: String,
    /// Status marker shown after the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CapacityStatus>,
}

impl Cell {
    /// Creates a plain cell.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: None,
        }
    }

    /// Creates a cell with a status marker.
    #[must_use]
    pub fn marked(text: impl Into<String>, status: CapacityStatus) -> Self {
        Self {
            text: text.into(),
            status: Some(status),
        }
    }

    /// Creates a cell whose marker is only set when `status` is present.
    #[must_use]
    pub fn with_status(text: impl Into<String>, status: Option<CapacityStatus>) -> Self {
        Self {
            text: text.into(),
            status,
        }
    }

    fn rendered(&self) -> String {
        match self.status {
            Some(status) => format!("{} [{}]", self.text, status),
            None => self.text.clone(),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

/// A titled table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Title printed above the table.
    pub title: String,
    /// Column headers.
    pub headers: Vec<String>,
    /// Rows of cells, one per header.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self, rendered: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in rendered {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

// First column left-aligned, the rest right-aligned.
fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("  {cell:>width$}"));
        }
    }
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::rendered).collect())
            .collect();
        let widths = self.widths(&rendered);
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        writeln!(f, "{}", self.title)?;
        write_line(f, &self.headers, &widths)?;
        writeln!(f, "{}", "-".repeat(total))?;
        for row in &rendered {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}
