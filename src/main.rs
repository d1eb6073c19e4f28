//! Standalone benchmark runner that prints the formatted report.
//!
//! Runs the three indexing strategies back to back, each against its own
//! throwaway database file in the current directory. The files are left on
//! disk afterwards so the results can be inspected with the sqlite3 shell.
//!
//! Usage:
//!   cargo run --release

use anyhow::Result;
use sqlite_index_bench::report::{print_report, RunResult};
use sqlite_index_bench::runner::{run_benchmark, RunConfig};
use std::path::Path;

fn main() -> Result<()> {
    println!("Running SQLite secondary-index benchmark...");
    println!("  Rows per run:     {}", RunConfig::STANDARD_ROWS);
    println!("  Lookups per run:  {}", RunConfig::STANDARD_QUERIES);

    let runs = [
        ("no index", "movies_no_index.db", RunConfig::no_index()),
        (
            "index before insert",
            "movies_index_before_insert.db",
            RunConfig::indexed_before_insert(),
        ),
        (
            "index before query",
            "movies_index_before_query.db",
            RunConfig::indexed_before_query(),
        ),
    ];

    let mut results = Vec::new();
    for (label, db_file, config) in runs {
        eprint!("  Benchmarking {label}...");
        let stats = run_benchmark(Path::new(db_file), &config)?;
        eprintln!(
            " done ({:.2}s insert, {:.2}s query)",
            stats.insert_secs(),
            stats.query_secs()
        );
        results.push(RunResult::new(label, config, stats));
    }

    print_report(&results);
    Ok(())
}
