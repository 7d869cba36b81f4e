//! Catalog-to-table conversion and JSON output.
//!
//! [`build_table`] streams a catalog line by line into a [`SymbolTable`];
//! [`write_table`] and [`table_to_json`] emit it as a key-sorted JSON object
//! with two-space indentation and unescaped non-ASCII text.
//!
//! # Example
//!
//! ```
//! use unimath_table_core::{parse_catalog, table_to_json};
//!
//! let catalog = "# header\n003B1^α^\\alpha^\\alpha^mathalpha^^^GREEK SMALL LETTER ALPHA\n";
//! let (table, stats) = parse_catalog(catalog).unwrap();
//! assert_eq!(stats.comments, 1);
//! assert_eq!(table.get("alpha").unwrap().detail, "α");
//!
//! let json = table_to_json(&table).unwrap();
//! assert!(json.starts_with("{\n  \"alpha\": {\n    \"command\": \"alpha\","));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{LineOutcome, extract_record};
use crate::types::{BuildStats, SymbolTable};

/// Builds a completion table from a catalog reader.
///
/// Lines are consumed in order; a later record with the same command replaces
/// an earlier one. Reading stops at the first malformed line.
///
/// # Errors
///
/// Returns [`Io`](crate::CatalogError::Io) if reading fails (including
/// invalid UTF-8) or [`TooFewFields`](crate::CatalogError::TooFewFields) for
/// a short data line.
pub fn build_table<R: BufRead>(reader: R) -> Result<(SymbolTable, BuildStats)> {
    let mut table = SymbolTable::new();
    let mut stats = BuildStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        stats.lines += 1;

        match extract_record(&line, line_number)? {
            LineOutcome::Comment => stats.comments += 1,
            LineOutcome::NoCommand => {
                debug!(line = line_number, "Skipping entry without command");
                stats.without_command += 1;
            }
            LineOutcome::Record(record) => {
                stats.records += 1;
                if let Some(previous) = table.insert(record) {
                    debug!(
                        line = line_number,
                        command = %previous.command,
                        "Replacing earlier entry"
                    );
                    stats.replaced += 1;
                }
            }
        }
    }

    info!(
        lines = stats.lines,
        commands = table.len(),
        comments = stats.comments,
        without_command = stats.without_command,
        replaced = stats.replaced,
        "Built symbol table"
    );
    Ok((table, stats))
}

/// Builds a completion table from catalog text held in memory.
pub fn parse_catalog(text: &str) -> Result<(SymbolTable, BuildStats)> {
    build_table(text.as_bytes())
}

/// Reads and converts the catalog at `path`.
///
/// # Errors
///
/// Same as [`build_table`], plus [`Io`](crate::CatalogError::Io) when the file
/// cannot be opened.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<(SymbolTable, BuildStats)> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading catalog");
    let file = File::open(path)?;
    build_table(BufReader::new(file))
}

/// Serializes the table to pretty JSON.
pub fn table_to_json(table: &SymbolTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Writes the table as pretty JSON to `writer` and flushes it.
pub fn write_table<W: Write>(table: &SymbolTable, writer: W) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Writes the table as pretty JSON to the file at `path`, replacing it.
pub fn save_table(table: &SymbolTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_table(table, file)?;
    debug!(path = %path.display(), commands = table.len(), "Wrote symbol table");
    Ok(())
}
