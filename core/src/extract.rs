//! Per-line record extraction from a `unimathsymbols.txt` catalog.
//!
//! Data lines are `^`-separated, at least eight fields wide:
//!
//! ```text
//! 02261^≡^\equiv^\equiv^mathrel^ ^\Equiv^# \Equiv (wasysym), IDENTICAL TO
//! ```
//!
//! Only field 1 (the glyph, shown as the completion detail), field 3 (the
//! command), field 6 (an alternative command) and field 7 (the description)
//! feed the completion table.

use crate::describe::format_description;
use crate::error::{CatalogError, Result};
use crate::types::SymbolRecord;

/// Separator between fields of a data line.
pub const FIELD_SEPARATOR: char = '^';

/// Lines starting with this character are comments.
pub const COMMENT_MARKER: char = '#';

/// Minimum number of fields on a data line.
pub const MIN_FIELDS: usize = 8;

const DETAIL_FIELD: usize = 1;
const COMMAND_FIELD: usize = 3;
const ALIAS_FIELD: usize = 6;
const DESCRIPTION_FIELD: usize = 7;

/// Alias fields starting with this marker are not real command names.
const ALIAS_EXCLUDED_MARKER: char = '-';

/// Result of examining one catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Comment line, ignored.
    Comment,
    /// Data line with an empty command field, ignored.
    NoCommand,
    /// Data line that produced a record.
    Record(SymbolRecord),
}

/// Extracts a completion record from one catalog line.
///
/// `line_number` is 1-based and only used for error reporting. A single
/// trailing `\n` or `\r\n` is ignored.
///
/// # Errors
///
/// Returns [`CatalogError::TooFewFields`] when a non-comment line has fewer
/// than [`MIN_FIELDS`] fields.
///
/// # Examples
///
/// ```
/// use unimath_table_core::{LineOutcome, extract_record};
///
/// let line = r"02208^∈^\in^\in^mathrel^ ^\in^ELEMENT OF";
/// let LineOutcome::Record(record) = extract_record(line, 1).unwrap() else {
///     panic!("expected a record");
/// };
/// assert_eq!(record.command, "in");
/// assert_eq!(record.detail, r#"∈ ("\in" command)"#);
/// assert_eq!(record.documentation, "- Element Of\n");
/// ```
pub fn extract_record(line: &str, line_number: usize) -> Result<LineOutcome> {
    let line = strip_line_ending(line);
    if line.starts_with(COMMENT_MARKER) {
        return Ok(LineOutcome::Comment);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Err(CatalogError::TooFewFields {
            line: line_number,
            found: fields.len(),
            expected: MIN_FIELDS,
        });
    }

    let raw_command = fields[COMMAND_FIELD];
    if raw_command.is_empty() {
        return Ok(LineOutcome::NoCommand);
    }
    let command = raw_command.strip_prefix('\\').unwrap_or(raw_command);

    Ok(LineOutcome::Record(SymbolRecord::new(
        command,
        detail_with_alias(fields[DETAIL_FIELD], fields[ALIAS_FIELD]),
        format_description(fields[DESCRIPTION_FIELD].trim()),
    )))
}

/// Appends a `("alias" command)` note to `detail` when `alias` names a
/// usable command.
pub fn detail_with_alias(detail: &str, alias: &str) -> String {
    if alias.is_empty() || alias.starts_with(ALIAS_EXCLUDED_MARKER) {
        detail.to_string()
    } else {
        format!("{detail} (\"{alias}\" command)")
    }
}

fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}
