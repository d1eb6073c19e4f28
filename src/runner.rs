//! Benchmark runner: one isolated run per indexing strategy.
//!
//! A run owns its database file for its whole lifetime. Phases, in order:
//!
//! | Phase                  | Timed?                          |
//! |------------------------|---------------------------------|
//! | Delete stale file      | no                              |
//! | Create table (+index)  | no                              |
//! | Bulk insert (1 txn)    | yes — `insert_duration`         |
//! | Deferred index build   | no (excluded from both timings) |
//! | Point-lookup workload  | yes — `query_duration`          |
//! | Close + file size      | no                              |
//!
//! When the index exists before the insert, its maintenance cost lands inside
//! `insert_duration`; when it is built between the phases, its cost lands in
//! neither. That asymmetry is what the experiment is designed to expose.

use crate::populate::{bulk_insert, random_year};
use anyhow::Result;
use rand::Rng;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Configuration for a single benchmark run.
///
/// `index_before_insert` and `index_before_query` are never both set by the
/// canonical constructors; a run with both set is still accepted and builds
/// the index once, during setup.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Rows to bulk-insert.
    pub rows: u64,
    /// Point lookups to execute.
    pub queries: u32,
    /// Build the `year` index before any data exists.
    pub index_before_insert: bool,
    /// Build the `year` index after the bulk load, before the workload.
    pub index_before_query: bool,
}

impl RunConfig {
    /// Full-scale row count used by the three canonical runs.
    pub const STANDARD_ROWS: u64 = 1_000_000;
    /// Full-scale lookup count used by the three canonical runs.
    pub const STANDARD_QUERIES: u32 = 1_000;

    /// Strategy 1: no secondary index at all.
    pub fn no_index() -> Self {
        Self {
            rows: Self::STANDARD_ROWS,
            queries: Self::STANDARD_QUERIES,
            index_before_insert: false,
            index_before_query: false,
        }
    }

    /// Strategy 2: index maintained throughout the bulk load.
    pub fn indexed_before_insert() -> Self {
        Self {
            index_before_insert: true,
            ..Self::no_index()
        }
    }

    /// Strategy 3: index built once, after the bulk load.
    pub fn indexed_before_query() -> Self {
        Self {
            index_before_query: true,
            ..Self::no_index()
        }
    }
}

/// Measurements from one completed run.
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Wall-clock time of the bulk-insert transaction (open through commit).
    pub insert_duration: Duration,
    /// Wall-clock time of the point-lookup workload.
    pub query_duration: Duration,
    /// On-disk database size after close, in binary MB (bytes / 1024²).
    pub file_size_mb: f64,
}

impl RunStats {
    pub fn insert_secs(&self) -> f64 {
        self.insert_duration.as_secs_f64()
    }

    pub fn query_secs(&self) -> f64 {
        self.query_duration.as_secs_f64()
    }
}

/// Create the movies table. No constraints beyond the integer primary key.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE movies (
            id INTEGER PRIMARY KEY,
            name TEXT,
            year INTEGER
        )",
    )?;
    Ok(())
}

/// Build the secondary index on `year`.
pub fn create_year_index(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE INDEX movies_year_idx ON movies (year)")?;
    Ok(())
}

/// Execute `queries` randomized `COUNT(*)` point lookups on `year`.
///
/// One prepared statement is reused across the loop; each iteration draws an
/// independent random year. Returns the total number of rows matched, which
/// the tests assert against; the runner only times the loop.
pub fn query_workload(conn: &Connection, queries: u32, rng: &mut impl Rng) -> Result<u64> {
    let mut stmt = conn.prepare("SELECT COUNT(*) FROM movies WHERE year = ?1")?;
    let mut matched = 0u64;
    for _ in 0..queries {
        let count: i64 = stmt.query_row([random_year(rng)], |row| row.get(0))?;
        matched += count as u64;
    }
    Ok(matched)
}

/// Run one full benchmark: fresh database, bulk load, workload, measurement.
///
/// Any pre-existing file at `db_path` is removed first, so consecutive runs
/// against the same path never share state. Errors are never caught here —
/// a failure that could distort the timings must abort the run.
pub fn run_benchmark(db_path: &Path, config: &RunConfig) -> Result<RunStats> {
    if db_path.exists() {
        fs::remove_file(db_path)?;
    }

    let mut conn = Connection::open(db_path)?;
    create_schema(&conn)?;
    if config.index_before_insert {
        create_year_index(&conn)?;
    }

    let mut rng = rand::thread_rng();

    let insert_start = Instant::now();
    bulk_insert(&mut conn, config.rows, &mut rng)?;
    let insert_duration = insert_start.elapsed();

    // Deferred index build sits between the timing brackets on purpose.
    if config.index_before_query && !config.index_before_insert {
        create_year_index(&conn)?;
    }

    let query_start = Instant::now();
    query_workload(&conn, config.queries, &mut rng)?;
    let query_duration = query_start.elapsed();

    // Close before stat(): an open connection may still hold unflushed pages
    // and a journal, which would skew the size measurement.
    conn.close().map_err(|(_, e)| e)?;
    let file_size_mb = fs::metadata(db_path)?.len() as f64 / (1024.0 * 1024.0);

    Ok(RunStats {
        insert_duration,
        query_duration,
        file_size_mb,
    })
}
