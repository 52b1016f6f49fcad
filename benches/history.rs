//! Benchmarks for playpack ingestion and export.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench history -- ingest`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Value, json};

use playpack::core::{ExportFilter, HistoryStore, export};

// =============================================================================
// Test Data Generators
// =============================================================================

/// Generates a history batch with timestamps in descending order, so the
/// store has real sorting work to do.
fn generate_history(count: usize) -> Value {
    let records: Vec<Value> = (0..count)
        .rev()
        .map(|i| {
            let ts = chrono::DateTime::from_timestamp(1_672_531_200 + i as i64 * 60, 0)
                .unwrap()
                .format("%Y-%m-%dT%H:%M:%SZ")
                .to_string();
            if i % 20 == 0 {
                // Podcast-style record with null metadata
                json!({"ts": ts, "ms_played": 1_800_000, "master_metadata_track_name": null})
            } else {
                json!({
                    "ts": ts,
                    "ms_played": (i % 300) * 1000,
                    "master_metadata_track_name": format!("Track {}", i),
                    "master_metadata_album_artist_name": "Artist",
                    "master_metadata_album_album_name": "Album"
                })
            }
        })
        .collect();
    Value::Array(records)
}

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

// =============================================================================
// Ingestion
// =============================================================================

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");

    for size in SIZES {
        let batch = generate_history(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| {
                let mut store = HistoryStore::new();
                store.ingest(black_box(std::slice::from_ref(batch))).unwrap()
            });
        });
    }

    group.finish();
}

/// Two overlapping halves, as when several export files cover the same period.
fn bench_ingest_overlapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_overlapping");

    for size in SIZES {
        let batch = generate_history(size);
        let halves = match &batch {
            Value::Array(records) => {
                let (a, b) = records.split_at(records.len() / 2);
                [Value::Array(b.to_vec()), Value::Array(a.to_vec())]
            }
            _ => unreachable!(),
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &halves, |b, halves| {
            b.iter(|| {
                let mut store = HistoryStore::new();
                store.ingest(black_box(halves)).unwrap()
            });
        });
    }

    group.finish();
}

// =============================================================================
// Export
// =============================================================================

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for size in SIZES {
        let mut store = HistoryStore::new();
        store.ingest(&[generate_history(size)]).unwrap();
        let filter = ExportFilter::new();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| export(black_box(store), black_box(&filter)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ingest, bench_ingest_overlapping, bench_export);
criterion_main!(benches);
