//! Name column inference
//!
//! Picks the one column of a [`Table`] that holds person names:
//! 1. the first canonical header present (exact, case-sensitive), in priority order
//! 2. otherwise the first textual column whose sample cell looks like a word
//!
//! The resulting [`NameSet`] is deduplicated and sorted ascending.

use crate::error::{Error, Result};
use crate::table::{CellValue, Column, ColumnKind, Table};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Header names recognised as holding person names, highest priority first
pub const CANONICAL_HEADERS: &[&str] = &[
    "name",
    "nombre",
    "first_name",
    "last_name",
    "full_name",
    "person",
];

/// Which cell the fallback rule samples to decide if a column looks like names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplePolicy {
    /// Only the first row; a missing first cell disqualifies the column
    ///
    /// This departs from pandas-style readers, where a missing cell becomes
    /// NaN, stringifies to "nan" and passes the word check.
    #[default]
    FirstCell,
    /// The first non-missing cell of the column
    FirstPresent,
}

/// How the name column was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolveRule {
    /// Matched one of [`CANONICAL_HEADERS`]
    Canonical,
    /// Picked by the textual-column fallback
    Inferred,
}

/// Distinct, sorted person names drawn from a single column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSet {
    /// Header of the source column (empty for the default set)
    pub column: String,
    /// Rule that picked the column
    pub rule: Option<ResolveRule>,
    names: Vec<String>,
}

impl NameSet {
    /// Collect the distinct non-missing values of a column
    fn collect(table: &Table, column: &Column, rule: Option<ResolveRule>) -> Self {
        let names: BTreeSet<String> = table
            .column_cells(column.index)
            .filter(|c| !c.is_empty())
            .map(CellValue::to_string_value)
            .collect();

        Self {
            column: column.name.clone(),
            rule,
            names: names.into_iter().collect(),
        }
    }

    /// Build a name set from an explicitly named column
    pub fn from_column(table: &Table, column_name: &str) -> Option<Self> {
        table
            .find_column(column_name)
            .map(|column| Self::collect(table, column, None))
    }

    /// Names in ascending order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// Position of a name in display order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }
}

/// Resolve names with the default sampling policy
pub fn resolve_names(table: &Table) -> Result<NameSet> {
    NameResolver::default().resolve(table)
}

/// Name column inference with a configurable sample policy
#[derive(Debug, Clone, Copy, Default)]
pub struct NameResolver {
    sample_policy: SamplePolicy,
}

impl NameResolver {
    pub fn new(sample_policy: SamplePolicy) -> Self {
        Self { sample_policy }
    }

    /// Determine the name column and return its distinct sorted values
    pub fn resolve(&self, table: &Table) -> Result<NameSet> {
        for header in CANONICAL_HEADERS {
            if let Some(column) = table.find_column(header) {
                let set = NameSet::collect(table, column, Some(ResolveRule::Canonical));
                if !set.is_empty() {
                    info!("using column: {}", column.name);
                    return Ok(set);
                }
                // A canonical column with no values falls through to the fallback
                debug!("canonical column '{}' has no values", column.name);
                break;
            }
        }

        for column in &table.columns {
            if !self.looks_like_names(table, column) {
                continue;
            }
            let set = NameSet::collect(table, column, Some(ResolveRule::Inferred));
            info!("using fallback column: {}", column.name);
            return Ok(set);
        }

        Err(Error::NoNameColumn {
            available: table.headers(),
        })
    }

    fn looks_like_names(&self, table: &Table, column: &Column) -> bool {
        if column.kind != ColumnKind::Textual {
            return false;
        }

        let sample = match self.sample_policy {
            SamplePolicy::FirstCell => table.column_cells(column.index).next(),
            SamplePolicy::FirstPresent => table.column_cells(column.index).find(|c| !c.is_empty()),
        };

        let text = sample.map(CellValue::to_string_value).unwrap_or_default();
        text.chars().count() > 2 && text.chars().any(char::is_alphabetic)
    }
}
