//! Selections of people and the checklist that produces them

use crate::error::{Error, Result};
use crate::resolver::NameSet;
use serde::{Deserialize, Serialize};

/// The people chosen for one save action, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// Select the given names, rejecting any that are not in the name set
    ///
    /// Duplicates collapse and the result follows the name set's order.
    pub fn from_names<S: AsRef<str>>(set: &NameSet, names: &[S]) -> Result<Self> {
        let mut positions = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let pos = set
                .position(name)
                .ok_or_else(|| Error::UnknownName(name.to_string()))?;
            positions.push(pos);
        }
        positions.sort_unstable();
        positions.dedup();

        Ok(Self {
            names: positions
                .into_iter()
                .map(|i| set.names()[i].clone())
                .collect(),
        })
    }

    /// Every name in the set
    pub fn all(set: &NameSet) -> Self {
        Self {
            names: set.names().to_vec(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Checkbox state over a name set
#[derive(Debug, Clone)]
pub struct Checklist {
    names: Vec<String>,
    checked: Vec<bool>,
}

impl Checklist {
    /// A checklist with nothing ticked
    pub fn new(set: &NameSet) -> Self {
        let names = set.names().to_vec();
        let checked = vec![false; names.len()];
        Self { names, checked }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Rows as (name, checked) pairs
    pub fn rows(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.names
            .iter()
            .zip(self.checked.iter())
            .map(|(n, c)| (n.as_str(), *c))
    }

    pub fn select_all(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = true);
    }

    pub fn deselect_all(&mut self) {
        self.checked.iter_mut().for_each(|c| *c = false);
    }

    /// Flip one row; returns its new state
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.checked.len();
        let slot = self
            .checked
            .get_mut(index)
            .ok_or(Error::InvalidSelection { index, len })?;
        *slot = !*slot;
        Ok(*slot)
    }

    /// Live count of ticked rows
    pub fn selected_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Snapshot the ticked rows as a selection
    pub fn selection(&self) -> Selection {
        Selection {
            names: self
                .rows()
                .filter(|(_, checked)| *checked)
                .map(|(name, _)| name.to_string())
                .collect(),
        }
    }
}
