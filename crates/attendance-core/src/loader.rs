//! Delimited-text loader for people tables

use crate::error::{Error, Result};
use crate::table::Table;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default field separator for people lists
pub const TAB: u8 = b'\t';

/// Load a tab-separated file into a Table
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    TableLoader::new().load(path)
}

/// Parse delimited text from a string (useful for testing)
pub fn parse_table_str(content: &str, source_name: &str, delimiter: u8) -> Result<Table> {
    TableLoader::new()
        .delimiter(delimiter)
        .read_from(content.as_bytes(), PathBuf::from(source_name))
}

/// Configurable reader for header-first delimited files
#[derive(Debug, Clone, Copy)]
pub struct TableLoader {
    delimiter: u8,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TableLoader {
    /// Loader for tab-separated input
    pub fn new() -> Self {
        Self { delimiter: TAB }
    }

    /// Use a different field separator
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a file from disk
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let table = self.read_from(BufReader::new(file), path.to_path_buf())?;
        debug!(
            path = %path.display(),
            columns = table.column_count(),
            rows = table.row_count(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse any reader; `path` is only used for diagnostics and provenance
    pub fn read_from<R: Read>(&self, reader: R, path: PathBuf) -> Result<Table> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true) // Allow varying number of fields
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| Error::Csv {
                path: path.clone(),
                source: e,
            })?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(Error::CsvParse {
                path,
                message: "no columns found in header".to_string(),
            });
        }

        let mut records = Vec::new();
        for (row_idx, result) in csv_reader.records().enumerate() {
            let record = result.map_err(|e| Error::Csv {
                path: path.clone(),
                source: e,
            })?;

            let mut fields: Vec<String> = record.iter().map(str::to_string).collect();

            // Pad short rows, truncate long ones
            if fields.len() > headers.len() {
                warn!(
                    "row {} in {} has more cells than columns, truncating",
                    row_idx + 1,
                    path.display()
                );
                fields.truncate(headers.len());
            }
            fields.resize(headers.len(), String::new());

            records.push(fields);
        }

        Ok(Table::from_records(headers, records, path))
    }
}
