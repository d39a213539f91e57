//! Tabular dataset model
//!
//! A plain rows-by-named-columns value table, the shape in which uploaded
//! data files reach the numeric core. Parsing a delimited text file into a
//! `Dataset` lives here too; anything fancier (spreadsheets, encodings) is
//! the caller's problem.
//!
//! The dataset itself never rejects anything: malformed cells become
//! [`Cell::Text`], absent cells become [`Cell::Missing`], and structural
//! complaints are the job of [`crate::config::validator::validate_dataset`].

use crate::stats::{basic_statistics, BasicStatistics};
use serde::Serialize;
use std::collections::HashSet;

/// A single table cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Parse a raw field: empty is missing, numeric parses as a number,
    /// anything else stays text
    pub fn parse(raw: &str) -> Cell {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Cell::Number(value),
            Err(_) => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Column type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// At least one number and no text cells
    Numeric,
    /// At least one text cell and no numbers
    Text,
    /// Both numbers and text present
    Mixed,
    /// Nothing but missing cells
    Empty,
}

/// Rows-by-named-columns table
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    column_names: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Build a dataset from column names and rows
    ///
    /// Short rows are padded with missing cells and long rows truncated, so
    /// ragged input still produces a rectangular table.
    pub fn new(column_names: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Dataset {
        let width = column_names.len();
        for row in &mut rows {
            row.resize(width, Cell::Missing);
        }
        Dataset { column_names, rows }
    }

    /// Parse delimited text: first line is the header, every other line a row
    ///
    /// Never fails; pathological input just yields a dataset the validator
    /// will flag as empty.
    pub fn from_delimited(text: &str, delimiter: char) -> Dataset {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let column_names: Vec<String> = match lines.next() {
            Some(header) => header
                .split(delimiter)
                .map(|name| name.trim().to_string())
                .collect(),
            None => Vec::new(),
        };
        let rows: Vec<Vec<Cell>> = lines
            .map(|line| line.split(delimiter).map(Cell::parse).collect())
            .collect();
        Dataset::new(column_names, rows)
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// True when there are no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.column_names.is_empty()
    }

    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|n| n == name)
    }

    fn column_cells(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Classify a column by the cells it holds
    pub fn column_kind(&self, index: usize) -> ColumnKind {
        let mut numbers = false;
        let mut text = false;
        for cell in self.column_cells(index) {
            match cell {
                Cell::Number(_) => numbers = true,
                Cell::Text(_) => text = true,
                Cell::Missing => {}
            }
        }
        match (numbers, text) {
            (true, false) => ColumnKind::Numeric,
            (false, true) => ColumnKind::Text,
            (true, true) => ColumnKind::Mixed,
            (false, false) => ColumnKind::Empty,
        }
    }

    /// Names of the purely numeric columns
    pub fn numeric_column_names(&self) -> Vec<&str> {
        (0..self.column_count())
            .filter(|&i| self.column_kind(i) == ColumnKind::Numeric)
            .map(|i| self.column_names[i].as_str())
            .collect()
    }

    /// The numeric values of a column, skipping anything else
    pub fn numeric_values(&self, index: usize) -> Vec<f64> {
        self.column_cells(index)
            .filter_map(Cell::as_number)
            .collect()
    }

    /// Names of columns containing at least one missing cell
    pub fn columns_with_missing(&self) -> Vec<String> {
        (0..self.column_count())
            .filter(|&i| self.column_cells(i).any(Cell::is_missing))
            .map(|i| self.column_names[i].clone())
            .collect()
    }

    /// Per-column summary of the whole table
    pub fn summarize(&self) -> DatasetSummary {
        let columns = (0..self.column_count())
            .map(|i| {
                let missing = self.column_cells(i).filter(|c| c.is_missing()).count();
                let mut seen: HashSet<String> = HashSet::new();
                for cell in self.column_cells(i) {
                    match cell {
                        Cell::Number(value) => {
                            seen.insert(format!("n:{}", value.to_bits()));
                        }
                        Cell::Text(value) => {
                            seen.insert(format!("t:{value}"));
                        }
                        Cell::Missing => {}
                    }
                }
                let kind = self.column_kind(i);
                let statistics = if kind == ColumnKind::Numeric {
                    basic_statistics(&self.numeric_values(i))
                } else {
                    None
                };
                ColumnSummary {
                    name: self.column_names[i].clone(),
                    kind,
                    missing,
                    unique: seen.len(),
                    statistics,
                }
            })
            .collect();
        DatasetSummary {
            rows: self.row_count(),
            columns,
        }
    }
}

/// Summary of a whole dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

/// Summary of a single column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    /// Number of missing cells
    pub missing: usize,
    /// Number of distinct non-missing values
    pub unique: usize,
    /// Descriptive statistics for numeric columns
    pub statistics: Option<BasicStatistics>,
}
