//! Attendance recording
//!
//! Turns a [`Selection`] into an [`AttendanceRecord`] stamped with a single
//! save instant, and writes it to `attendances_<YYYYMMDD>_<HHMMSS>.csv`.
//! Two saves within the same second target the same file; the later one wins.

use crate::error::{Error, Result};
use crate::selection::Selection;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Status written for every selected person
pub const PRESENT: &str = "Present";

/// Human-readable date column format
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Precise capture instant format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// One output row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttendanceRow {
    pub name: String,
    pub status: String,
    pub record_date: String,
    pub timestamp: String,
}

/// Rows produced by one save action
#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    /// When the save began; shared by every row
    pub taken_at: DateTime<Local>,
    pub rows: Vec<AttendanceRow>,
}

impl AttendanceRecord {
    /// Build the record for a non-empty selection
    pub fn build(selection: &Selection, taken_at: DateTime<Local>) -> Result<Self> {
        if selection.is_empty() {
            return Err(Error::EmptySelection);
        }

        let record_date = taken_at.format(RECORD_DATE_FORMAT).to_string();
        let timestamp = taken_at.format(TIMESTAMP_FORMAT).to_string();

        let rows = selection
            .names()
            .iter()
            .map(|name| AttendanceRow {
                name: name.clone(),
                status: PRESENT.to_string(),
                record_date: record_date.clone(),
                timestamp: timestamp.clone(),
            })
            .collect();

        Ok(Self { taken_at, rows })
    }

    /// Output file name for this record
    pub fn file_name(&self) -> String {
        attendance_file_name(self.taken_at)
    }

    pub fn record_date(&self) -> String {
        self.taken_at.format(RECORD_DATE_FORMAT).to_string()
    }
}

/// `attendances_<YYYYMMDD>_<HHMMSS>.csv` for the given instant
pub fn attendance_file_name(at: DateTime<Local>) -> String {
    format!("attendances_{}.csv", at.format(FILE_STAMP_FORMAT))
}

/// Outcome of a successful save, ready for display
#[derive(Debug, Clone)]
pub struct SaveSummary {
    pub path: PathBuf,
    pub count: usize,
    pub record_date: String,
    pub names: Vec<String>,
}

impl fmt::Display for SaveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());

        writeln!(f, "Attendance saved successfully!")?;
        writeln!(f)?;
        writeln!(f, "File: {}", file)?;
        writeln!(f, "Total present: {}", self.count)?;
        writeln!(f, "Date: {}", self.record_date)?;
        writeln!(f)?;
        write!(f, "People present:")?;
        for name in &self.names {
            write!(f, "\n• {}", name)?;
        }
        Ok(())
    }
}

/// Writes attendance records into an output directory
#[derive(Debug, Clone)]
pub struct Recorder {
    output_dir: PathBuf,
}

impl Recorder {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Save the selection stamped with the current local time
    pub fn save(&self, selection: &Selection) -> Result<SaveSummary> {
        self.save_at(selection, Local::now())
    }

    /// Save the selection stamped with `taken_at`
    pub fn save_at(&self, selection: &Selection, taken_at: DateTime<Local>) -> Result<SaveSummary> {
        let record = match AttendanceRecord::build(selection, taken_at) {
            Ok(r) => r,
            Err(e) => {
                warn!("save rejected: {}", e);
                return Err(e);
            }
        };

        let path = self.output_dir.join(record.file_name());
        write_record(&record, &path).map_err(|source| Error::Save {
            path: path.clone(),
            source,
        })?;

        info!("attendance saved to {}", path.display());
        info!("total people present: {}", record.rows.len());

        Ok(SaveSummary {
            count: record.rows.len(),
            record_date: record.record_date(),
            names: record.rows.into_iter().map(|r| r.name).collect(),
            path,
        })
    }
}

fn write_record(record: &AttendanceRecord, path: &Path) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &record.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
