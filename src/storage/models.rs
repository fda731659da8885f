//! Data models for the storage layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category lookup row referenced by competitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub category_name: String,
}

/// One row of the competitions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    pub competition_id: String,
    pub competition_name: String,
    pub parent_id: Option<String>,
    /// Stored in the `type` column.
    pub kind: String,
    pub gender: String,
    pub category_id: Option<String>,
}

/// One column of a table, as reported by information_schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub column_name: String,
    pub data_type: String,
}

/// A generic tabular query result with every cell stringified.
///
/// Shared by the dashboard renderer and the query helper's text output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for TableData {
    /// Aligned text rendering for terminal output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return writeln!(f, "(no columns)");
        }

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let render_line = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let line = cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    format!("{:width$}", cell, width = widths.get(i).copied().unwrap_or(0))
                })
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())
        };

        render_line(f, &self.columns)?;
        let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        render_line(f, &separator)?;
        for row in &self.rows {
            render_line(f, row)?;
        }

        Ok(())
    }
}
