use std::io;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;
use unimath_table_core::{BuildStats, SymbolTable, load_catalog, save_table, write_table};

/// Catalog read when `--input` is not given.
const DEFAULT_INPUT: &str = "unimathsymbols.txt";

/// Table written when `--output` is not given.
const DEFAULT_OUTPUT: &str = "../data/unimathsymbols.json";

/// `--output` value that selects standard output.
const STDOUT_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "unimath-table", version)]
#[command(about = "Convert unimathsymbols.txt into a JSON command completion table")]
struct Cli {
    /// Path to the `^`-delimited symbol catalog.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Path of the JSON table to write (`-` for stdout).
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), String> {
    let (table, stats) = load_catalog(&cli.input)
        .map_err(|e| format!("failed to read catalog {}: {e}", cli.input.display()))?;

    write_output(&table, &cli.output)
        .map_err(|e| format!("failed to write table {}: {e}", cli.output.display()))?;

    log_summary(&stats, &table, &cli.output);
    Ok(())
}

fn write_output(table: &SymbolTable, output: &Path) -> unimath_table_core::Result<()> {
    if output.as_os_str() == STDOUT_PATH {
        write_table(table, io::stdout().lock())
    } else {
        save_table(table, output)
    }
}

fn log_summary(stats: &BuildStats, table: &SymbolTable, output: &Path) {
    info!(
        output = %output.display(),
        commands = table.len(),
        records = stats.records,
        replaced = stats.replaced,
        "Wrote completion table"
    );
}
