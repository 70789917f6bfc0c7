//! attendance-core: Core library for taking attendance from a people list
//!
//! This library provides functionality to:
//! - Load a tab-separated people list into a typed table
//! - Infer which column holds person names
//! - Track a checklist selection over those names
//! - Write a timestamped attendance record as CSV

pub mod config;
pub mod discovery;
pub mod error;
pub mod loader;
pub mod recorder;
pub mod resolver;
pub mod selection;
pub mod table;

pub use config::AttendanceConfig;
pub use discovery::{ensure_input, sibling_files};
pub use error::{Error, Result};
pub use loader::{load_table, parse_table_str, TableLoader};
pub use recorder::{attendance_file_name, AttendanceRecord, AttendanceRow, Recorder, SaveSummary};
pub use resolver::{resolve_names, NameResolver, NameSet, ResolveRule, SamplePolicy, CANONICAL_HEADERS};
pub use selection::{Checklist, Selection};
pub use table::{CellValue, Column, ColumnKind, Row, Table};
