//! Completion table type definitions.
//!
//! This module defines the data model produced from a symbol catalog. The
//! types serialize with [`serde`] into the JSON layout consumed by editor
//! completion providers.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// One completion entry for a math command.
///
/// # Examples
///
/// ```
/// use unimath_table_core::SymbolRecord;
///
/// let record = SymbolRecord::new("alpha", "mathalpha", "- = \\mitalpha");
/// assert_eq!(record.command, "alpha");
/// assert_eq!(record.detail, "mathalpha");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// Command name without the leading backslash (e.g. "alpha").
    pub command: String,
    /// Category code, optionally followed by an alias annotation.
    pub detail: String,
    /// Markdown bullet list shown as completion help.
    pub documentation: String,
}

impl SymbolRecord {
    /// Creates a record from its three output fields.
    pub fn new(
        command: impl Into<String>,
        detail: impl Into<String>,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            detail: detail.into(),
            documentation: documentation.into(),
        }
    }
}

/// Command-keyed lookup table.
///
/// Backed by a [`BTreeMap`] so iteration and serialization are always in key
/// order, which keeps the emitted JSON byte-identical between runs.
///
/// # Examples
///
/// ```
/// use unimath_table_core::{SymbolRecord, SymbolTable};
///
/// let mut table = SymbolTable::new();
/// table.insert(SymbolRecord::new("beta", "mathalpha", ""));
/// table.insert(SymbolRecord::new("alpha", "mathalpha", ""));
///
/// let keys: Vec<&str> = table.commands().collect();
/// assert_eq!(keys, vec!["alpha", "beta"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    records: BTreeMap<String, SymbolRecord>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its own command name.
    ///
    /// Returns the record previously stored under that name, if any. The new
    /// record always wins.
    pub fn insert(&mut self, record: SymbolRecord) -> Option<SymbolRecord> {
        self.records.insert(record.command.clone(), record)
    }

    /// Looks up a record by command name.
    pub fn get(&self, command: &str) -> Option<&SymbolRecord> {
        self.records.get(command)
    }

    /// Returns `true` if a record exists for `command`.
    pub fn contains(&self, command: &str) -> bool {
        self.records.contains_key(command)
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over command names in sorted order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Iterates over records in command order.
    pub fn iter(&self) -> btree_map::Values<'_, String, SymbolRecord> {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolRecord;
    type IntoIter = btree_map::Values<'a, String, SymbolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Line counters collected while building a [`SymbolTable`].
///
/// Informational only; the table contents never depend on these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Total lines read from the catalog.
    pub lines: usize,
    /// Lines starting with the comment marker.
    pub comments: usize,
    /// Data lines whose command field was empty.
    pub without_command: usize,
    /// Records inserted, including ones that replaced an earlier entry.
    pub records: usize,
    /// Inserts that overwrote an existing command.
    pub replaced: usize,
}

impl BuildStats {
    /// Number of distinct commands in the resulting table.
    pub fn distinct_commands(&self) -> usize {
        self.records - self.replaced
    }
}
