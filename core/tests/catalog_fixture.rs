use std::fs;
use std::path::PathBuf;

use unimath_table_core::{BuildStats, SymbolTable, load_catalog, parse_catalog, table_to_json};

#[test]
fn test_excerpt_matches_expected_json() {
    let (table, _) = load_catalog(fixture_path("unimathsymbols-excerpt.txt"))
        .expect("fixture catalog should parse");
    let expected = fixture("unimathsymbols-excerpt.json");

    let json = table_to_json(&table).expect("table should serialize");
    assert_eq!(json, expected.trim_end());
}

#[test]
fn test_excerpt_stats() {
    let (table, stats) = load_catalog(fixture_path("unimathsymbols-excerpt.txt"))
        .expect("fixture catalog should parse");

    assert_eq!(
        stats,
        BuildStats {
            lines: 16,
            comments: 4,
            without_command: 1,
            records: 11,
            replaced: 1,
        }
    );
    assert_eq!(table.len(), 10);
}

#[test]
fn test_excerpt_skips_comments_and_missing_commands() {
    let (table, _) = parse_catalog(&fixture("unimathsymbols-excerpt.txt")).unwrap();

    // The `!` entry has no unicode-math command.
    assert!(!table.contains("!"));
    assert!(!table.contains(""));
    assert!(table.commands().all(|c| !c.starts_with('\\')));
}

#[test]
fn test_excerpt_alias_annotations() {
    let (table, _) = parse_catalog(&fixture("unimathsymbols-excerpt.txt")).unwrap();

    assert_eq!(table.get("equiv").unwrap().detail, r#"≡ ("\Equiv" command)"#);
    // `-\neq` marks a command that is not an alias.
    assert_eq!(table.get("ne").unwrap().detail, "≠");
}

#[test]
fn test_output_is_deterministic() {
    let text = fixture("unimathsymbols-excerpt.txt");
    let (first, _) = parse_catalog(&text).unwrap();
    let (second, _) = parse_catalog(&text).unwrap();

    assert_eq!(
        table_to_json(&first).unwrap(),
        table_to_json(&second).unwrap()
    );
}

#[test]
fn test_expected_json_round_trips_into_table() {
    let (table, _) = parse_catalog(&fixture("unimathsymbols-excerpt.txt")).unwrap();
    let expected: SymbolTable =
        serde_json::from_str(&fixture("unimathsymbols-excerpt.json")).unwrap();
    assert_eq!(table, expected);
}

#[test]
fn test_missing_catalog_is_io_error() {
    let err = load_catalog(fixture_path("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, unimath_table_core::CatalogError::Io(_)));
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture file must be readable")
}
