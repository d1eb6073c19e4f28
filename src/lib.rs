//! SQLite Secondary-Index Benchmark
//!
//! Measures the cost and benefit of a secondary index on a non-primary-key
//! column across three strategies, each against a fresh on-disk database:
//! - **no index**: bulk load and query with nothing but the rowid
//! - **index before insert**: the index is maintained during the bulk load
//! - **index before query**: the index is built once, after the bulk load
//!
//! Each run bulk-inserts 1,000,000 synthetic rows inside a single transaction,
//! executes 1,000 randomized `COUNT(*)` point lookups on `year`, and reports
//! the elapsed time of both phases plus the resulting file size.
//!
//! Run the full experiment: `cargo run --release`
//! Run tests: `cargo test`
//! Run criterion benchmarks: `cargo bench`

pub mod populate;
pub mod report;
pub mod runner;
