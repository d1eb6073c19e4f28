//! Synthetic data generation and the single-transaction bulk load.
//!
//! Row shape matches the movie-catalog experiment: an auto-increment id, an
//! 8-character random name, and a release year in `[1900, 2000]`. Names and
//! years are drawn fresh per row; the generators take any [`Rng`] so the
//! binary can use `thread_rng` while tests pass a seeded `StdRng`.

use anyhow::Result;
use rand::Rng;
use rusqlite::{params, Connection};

/// Inclusive lower bound for generated (and queried) years.
pub const YEAR_MIN: i32 = 1900;
/// Inclusive upper bound for generated (and queried) years.
pub const YEAR_MAX: i32 = 2000;

/// Generate an 8-character name: one uppercase ASCII letter followed by
/// seven lowercase ASCII letters, each uniform over the 26-letter alphabet.
pub fn random_name(rng: &mut impl Rng) -> String {
    let mut name = String::with_capacity(8);
    name.push((b'A' + rng.gen_range(0u8..26)) as char);
    for _ in 0..7 {
        name.push((b'a' + rng.gen_range(0u8..26)) as char);
    }
    name
}

/// Uniform random year, both bounds inclusive.
pub fn random_year(rng: &mut impl Rng) -> i32 {
    rng.gen_range(YEAR_MIN..=YEAR_MAX)
}

/// Insert `rows` generated records inside one transaction.
///
/// A single prepared statement is reused for every insert; the transaction is
/// committed exactly once at the end. Any failure aborts the load and
/// propagates — partial data is rolled back with the transaction.
pub fn bulk_insert(conn: &mut Connection, rows: u64, rng: &mut impl Rng) -> Result<()> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare("INSERT INTO movies (name, year) VALUES (?1, ?2)")?;
        for _ in 0..rows {
            stmt.execute(params![random_name(rng), random_year(rng)])?;
        }
    }
    tx.commit()?;
    Ok(())
}
