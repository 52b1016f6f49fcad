//! Example: Using playpack as a library
//!
//! This example merges two small in-memory exports and prints the result.
//!
//! Run with: cargo run --example library_usage

use playpack::prelude::*;
use serde_json::json;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== playpack Library Usage Examples ===\n");

    // Example 1: Ingest two overlapping exports
    println!("1. Ingesting two exports:");
    let endsong_0 = json!([
        {"ts": "2023-06-02T09:00:00Z", "ms_played": 180000,
         "master_metadata_track_name": "Morning Song", "master_metadata_album_artist_name": "Band",
         "master_metadata_album_album_name": "Daybreak"},
        {"ts": "2023-06-01T21:00:00Z", "ms_played": 8000,
         "master_metadata_track_name": "Skipped Song", "master_metadata_album_artist_name": "Band",
         "master_metadata_album_album_name": "Daybreak"}
    ]);
    let endsong_1 = json!([
        {"ts": "2023-06-01T22:00:00Z", "ms_played": 240000,
         "master_metadata_track_name": "Night Song", "master_metadata_album_artist_name": "Band",
         "master_metadata_album_album_name": null},
        {"ts": "2023-06-01T23:00:00Z", "ms_played": 1200000,
         "master_metadata_track_name": null, "master_metadata_album_artist_name": null,
         "episode_name": "A Podcast Episode"}
    ]);

    let mut store = HistoryStore::new();
    let report = store.ingest(&[endsong_0, endsong_1])?;
    println!(
        "   {} plays kept, {} records skipped",
        report.accepted, report.rejected
    );

    // Example 2: Inspect the merged history
    println!("\n2. Merged history:");
    for event in store.events() {
        println!(
            "   {} | {} - {} ({} ms)",
            event.played_at(),
            event.album_artist(),
            event.track(),
            event.duration_ms()
        );
    }
    if let Some((earliest, latest)) = store.date_range() {
        println!("   Range: {} .. {}", earliest, latest);
    }

    // Example 3: Export with the default filter
    println!("\n3. Default export (plays over 30s):");
    let summary = export(&store, &ExportFilter::new());
    println!(
        "   exported {}, filtered {}",
        summary.exported, summary.filtered
    );
    println!("   {}", summary.output);

    // Example 4: Restrict to one day; bounds are exclusive
    println!("\n4. Only 2023-06-01:");
    let filter = ExportFilter::new()
        .with_start_date("2023-05-31")?
        .with_end_date("2023-06-02")?
        .with_min_seconds(5);
    let summary = export(&store, &filter);
    println!("   {}", summary.output);

    println!("\n=== Done! ===");
    Ok(())
}
