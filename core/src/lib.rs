//! Symbol catalog parsing and completion table generation.
//!
//! This crate turns the `^`-delimited `unimathsymbols.txt` catalog into a
//! command-keyed table for editor autocompletion:
//!
//! - [`extract_record`] — turns one catalog line into a [`SymbolRecord`],
//!   skipping comments and entries without a command.
//! - [`format_description`] — rewrites a description field into markdown
//!   bullets, one per referenced command.
//! - [`build_table`] / [`load_catalog`] — stream a whole catalog into a
//!   [`SymbolTable`] along with [`BuildStats`].
//! - [`write_table`] / [`save_table`] — emit the table as key-sorted JSON.
//!
//! # Example
//!
//! ```
//! use unimath_table_core::*;
//!
//! let catalog = concat!(
//!     "# comment\n",
//!     "02211^∑^\\sum^\\sum^mathop^ ^^= \\Sigma (greek), N-ARY SUMMATION\n",
//! );
//! let (table, stats) = parse_catalog(catalog).unwrap();
//! assert_eq!(stats.comments, 1);
//!
//! let sum = table.get("sum").unwrap();
//! assert_eq!(sum.detail, "∑");
//! assert_eq!(sum.documentation, "- N-Ary Summation\n- \\Sigma (greek)");
//! ```

mod catalog;
mod describe;
mod error;
mod extract;
mod types;

pub use catalog::{build_table, load_catalog, parse_catalog, save_table, table_to_json, write_table};
pub use describe::format_description;
pub use error::{CatalogError, Result};
pub use extract::{
    COMMENT_MARKER, FIELD_SEPARATOR, LineOutcome, MIN_FIELDS, detail_with_alias, extract_record,
};
pub use types::*;
