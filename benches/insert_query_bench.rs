//! Criterion benchmark harness: measures bulk-insert and point-lookup cost
//! for the indexing strategies at reduced scale. The full 1M-row experiment
//! lives in the binary (`cargo run --release`); this harness exists for
//! statistically tighter comparisons of the two timed phases.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rusqlite::Connection;
use sqlite_index_bench::populate::bulk_insert;
use sqlite_index_bench::runner::{create_schema, create_year_index, query_workload};
use tempfile::TempDir;

const BENCH_ROWS: u64 = 20_000;
const BENCH_QUERIES: u32 = 100;

/// Open a file-backed database with the schema (and optionally the index)
/// already in place.
fn fresh_db(dir: &TempDir, name: &str, index_first: bool) -> Connection {
    let conn = Connection::open(dir.path().join(name)).expect("open database");
    create_schema(&conn).expect("create schema");
    if index_first {
        create_year_index(&conn).expect("create index");
    }
    conn
}

fn bench_bulk_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_insert");
    group.sample_size(10);

    for (label, index_first) in [("no_index", false), ("index_before_insert", true)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &index_first,
            |b, &index_first| {
                b.iter_batched(
                    || {
                        let dir = TempDir::new().expect("tempdir");
                        let conn = fresh_db(&dir, "insert.db", index_first);
                        (dir, conn)
                    },
                    |(_dir, mut conn)| {
                        bulk_insert(&mut conn, BENCH_ROWS, &mut rand::thread_rng())
                            .expect("bulk insert");
                    },
                    BatchSize::PerIteration,
                );
            },
        );
    }
    group.finish();
}

fn bench_point_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_lookups");

    for (label, indexed) in [("full_scan", false), ("indexed", true)] {
        let dir = TempDir::new().expect("tempdir");
        let mut conn = fresh_db(&dir, "query.db", false);
        bulk_insert(&mut conn, BENCH_ROWS, &mut rand::thread_rng()).expect("populate");
        if indexed {
            create_year_index(&conn).expect("create index");
        }

        group.bench_function(BenchmarkId::from_parameter(label), |b| {
            let mut rng = rand::thread_rng();
            b.iter(|| query_workload(&conn, BENCH_QUERIES, &mut rng).expect("workload"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bulk_insert, bench_point_lookups);
criterion_main!(benches);
