//! Report module: prints human-readable results for the indexing strategies.

use crate::runner::{RunConfig, RunStats};

/// Results from one benchmark run, tagged with its strategy label.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub label: String,
    pub config: RunConfig,
    pub stats: RunStats,
}

impl RunResult {
    pub fn new(label: &str, config: RunConfig, stats: RunStats) -> Self {
        Self {
            label: label.to_string(),
            config,
            stats,
        }
    }

    /// Sustained insert throughput over the bulk-load phase.
    pub fn insert_rows_per_sec(&self) -> f64 {
        let secs = self.stats.insert_secs();
        if secs <= 0.0 {
            return 0.0;
        }
        self.config.rows as f64 / secs
    }

    /// Mean point-lookup latency in microseconds.
    pub fn mean_lookup_us(&self) -> f64 {
        if self.config.queries == 0 {
            return 0.0;
        }
        self.stats.query_secs() * 1e6 / self.config.queries as f64
    }
}

/// Print a formatted report comparing the strategies.
pub fn print_report(results: &[RunResult]) {
    println!("\n{}", "=".repeat(80));
    println!("  SQLite Secondary-Index Benchmark Report");
    println!("{}", "=".repeat(80));

    for result in results {
        println!("\n  Strategy: {}", result.label);
        println!("  {}", "-".repeat(60));
        println!(
            "  Bulk insert:     {:>10.2} s  ({:>9.0} rows/s, {} rows)",
            result.stats.insert_secs(),
            result.insert_rows_per_sec(),
            result.config.rows
        );
        println!(
            "  Query workload:  {:>10.2} s  ({:>9.1} µs/lookup, {} lookups)",
            result.stats.query_secs(),
            result.mean_lookup_us(),
            result.config.queries
        );
        println!("  File size:       {:>10.2} MB", result.stats.file_size_mb);
    }

    println!("\n{}", "=".repeat(80));

    // Comparison table
    if results.len() >= 2 {
        println!("\n  Comparison Summary:");
        println!(
            "  {:24} {:>12} {:>12} {:>14} {:>10}",
            "Strategy", "Insert (s)", "Query (s)", "µs/lookup", "Size (MB)"
        );
        println!("  {}", "-".repeat(76));
        for r in results {
            println!(
                "  {:24} {:>12.2} {:>12.2} {:>14.1} {:>10.2}",
                r.label,
                r.stats.insert_secs(),
                r.stats.query_secs(),
                r.mean_lookup_us(),
                r.stats.file_size_mb
            );
        }
    }

    println!();
}
