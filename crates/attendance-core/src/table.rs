//! Core table types for representing a loaded people list

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed table from a single delimited file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Column definitions, in file order
    pub columns: Vec<Column>,
    /// Row data
    pub rows: Vec<Row>,
    /// Source file path
    pub source_path: PathBuf,
}

impl Table {
    /// Build a table from headers and raw field text, inferring column kinds
    ///
    /// Every present cell of a textual column keeps its exact (trimmed) text,
    /// so values such as "007" or "1.0" are not rewritten as numbers.
    pub fn from_records(
        headers: Vec<String>,
        records: Vec<Vec<String>>,
        source_path: PathBuf,
    ) -> Self {
        let parsed: Vec<Vec<CellValue>> = records
            .iter()
            .map(|r| r.iter().map(|s| CellValue::parse(s)).collect())
            .collect();

        let columns: Vec<Column> = headers
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let kind = ColumnKind::infer(parsed.iter().filter_map(|r| r.get(i)));
                Column::new(name, i, kind)
            })
            .collect();

        let rows = records
            .into_iter()
            .zip(parsed)
            .map(|(raw, cells)| {
                let cells = cells
                    .into_iter()
                    .zip(raw)
                    .zip(&columns)
                    .map(|((cell, text), column)| match (column.kind, cell) {
                        (ColumnKind::Textual, CellValue::Integer(_) | CellValue::Float(_)) => {
                            CellValue::String(text.trim().to_string())
                        }
                        (_, cell) => cell,
                    })
                    .collect();
                Row::new(cells)
            })
            .collect();

        Self {
            columns,
            rows,
            source_path,
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Find a column by exact (case-sensitive) name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Header names in file order
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Iterate over the cells of one column, top to bottom
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |r| r.get(index))
    }
}

/// Coarse type of a column, decided once at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// At least one cell is free text
    Textual,
    /// Every present cell is an integer or float
    Numeric,
    /// No present cells at all
    Other,
}

impl ColumnKind {
    /// Infer the kind of a column from its cells
    pub fn infer<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut kind = ColumnKind::Other;
        for cell in cells {
            match cell {
                CellValue::String(_) => return ColumnKind::Textual,
                CellValue::Integer(_) | CellValue::Float(_) => kind = ColumnKind::Numeric,
                CellValue::Empty => {}
            }
        }
        kind
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Textual => "text",
            ColumnKind::Numeric => "numeric",
            ColumnKind::Other => "other",
        }
    }
}

/// A column definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Header text
    pub name: String,
    /// Column index (0-based)
    pub index: usize,
    /// Inferred kind
    pub kind: ColumnKind,
}

impl Column {
    /// Create a new column
    pub fn new(name: String, index: usize, kind: ColumnKind) -> Self {
        Self { name, index, kind }
    }
}

/// A row of data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    /// Cell values for each column
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Create a new row
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// Cell text read as missing, matched exactly after trimming
pub const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A cell value with type detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// String value
    String(String),
    /// Empty/missing cell
    Empty,
}

impl CellValue {
    /// Parse a string into a CellValue, detecting the type
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();

        if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
            return CellValue::Empty;
        }

        if let Ok(i) = trimmed.parse::<i64>() {
            return CellValue::Integer(i);
        }

        // "inf"/"infinity" parse as f64 but are text as far as we care
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return CellValue::Float(f);
            }
        }

        CellValue::String(trimmed.to_string())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Convert to a display string
    pub fn to_string_value(&self) -> String {
        match self {
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::String(s) => s.clone(),
            CellValue::Empty => String::new(),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(fl) => write!(f, "{}", fl),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Empty => write!(f, ""),
        }
    }
}
