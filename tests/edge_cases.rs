//! Edge case tests for playpack
//!
//! These tests cover unusual but real-world input shapes found in streaming
//! history exports.

use chrono::{NaiveDate, TimeZone, Utc};
use playpack::core::{ExportFilter, HistoryStore, export};
use playpack::error::PlaypackError;
use serde_json::{Value, json};

fn record(track: &str, ts: &str, ms: Value) -> Value {
    json!({
        "ts": ts,
        "ms_played": ms,
        "master_metadata_track_name": track,
        "master_metadata_album_artist_name": "Artist"
    })
}

// =========================================================================
// Record shapes
// =========================================================================

#[test]
fn test_podcast_episode_is_rejected() {
    let episode = json!({
        "ts": "2023-05-01T12:00:00Z",
        "ms_played": 1800000,
        "master_metadata_track_name": null,
        "master_metadata_album_artist_name": null,
        "master_metadata_album_album_name": null,
        "episode_name": "Episode 12",
        "episode_show_name": "Some Show"
    });

    let mut store = HistoryStore::new();
    let report = store.ingest(&[json!([episode])]).unwrap();
    assert_eq!(report.accepted, 0);
    assert_eq!(report.rejected, 1);
}

#[test]
fn test_non_object_records_are_rejected() {
    let mut store = HistoryStore::new();
    let report = store
        .ingest(&[json!([null, 42, "text", [], record("ok", "2023-05-01T00:00:00Z", json!(60000))])])
        .unwrap();
    assert_eq!(report.accepted, 1);
    assert_eq!(report.rejected, 4);
}

#[test]
fn test_extra_fields_are_ignored() {
    let mut r = record("ok", "2023-05-01T00:00:00Z", json!(60000));
    r["platform"] = json!("Android OS 13");
    r["conn_country"] = json!("DE");
    r["shuffle"] = json!(true);

    let mut store = HistoryStore::new();
    assert_eq!(store.ingest(&[json!([r])]).unwrap().accepted, 1);
}

#[test]
fn test_non_string_album_becomes_none() {
    let mut r = record("ok", "2023-05-01T00:00:00Z", json!(60000));
    r["master_metadata_album_album_name"] = json!(7);

    let mut store = HistoryStore::new();
    store.ingest(&[json!([r])]).unwrap();
    assert!(store.events()[0].album().is_none());
}

#[test]
fn test_string_duration_is_rejected_not_fatal() {
    let mut store = HistoryStore::new();
    let report = store
        .ingest(&[json!([record("quoted", "2023-05-01T00:00:00Z", json!("60000"))])])
        .unwrap();
    assert_eq!(report.rejected, 1);
}

#[test]
fn test_negative_duration_is_fatal() {
    let mut store = HistoryStore::new();
    let err = store
        .ingest(&[json!([record("neg", "2023-05-01T00:00:00Z", json!(-1))])])
        .unwrap_err();
    assert!(matches!(err, PlaypackError::InvalidDuration { .. }));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_fractional_duration_is_fatal() {
    let mut store = HistoryStore::new();
    let err = store
        .ingest(&[json!([record("frac", "2023-05-01T00:00:00Z", json!(1500.5))])])
        .unwrap_err();
    assert!(err.to_string().contains("1500.5"));
}

#[test]
fn test_empty_timestamp_is_fatal() {
    let mut store = HistoryStore::new();
    let result = store.ingest(&[json!([record("empty", "", json!(60000))])]);
    assert!(matches!(result, Err(PlaypackError::InvalidTimestamp { .. })));
}

#[test]
fn test_empty_call_and_empty_batches() {
    let mut store = HistoryStore::new();
    assert_eq!(store.ingest(&[]).unwrap().accepted, 0);
    assert_eq!(store.ingest(&[json!([]), json!([])]).unwrap().rejected, 0);
    assert!(store.is_empty());
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_sub_second_ordering() {
    let mut store = HistoryStore::new();
    store
        .ingest(&[json!([
            record("later", "2023-05-01T00:00:00.900Z", json!(60000)),
            record("earlier", "2023-05-01T00:00:00.100Z", json!(60000)),
        ])])
        .unwrap();

    assert_eq!(store.events()[0].track(), "earlier");
    let summary = export(&store, &ExportFilter::new());
    assert!(summary.output.contains("2023-05-01T00:00:00.100000Z"));
}

#[test]
fn test_export_time_ignores_original_offset() {
    let mut store = HistoryStore::new();
    store
        .ingest(&[json!([record("tz", "2023-05-01T12:00:00-05:00", json!(60000))])])
        .unwrap();

    assert_eq!(
        store.events()[0].played_at(),
        Utc.with_ymd_and_hms(2023, 5, 1, 17, 0, 0).unwrap()
    );
    let summary = export(&store, &ExportFilter::new());
    assert!(summary.output.contains(r#""time":"2023-05-01T17:00:00Z""#));
}

// =========================================================================
// Filters
// =========================================================================

#[test]
fn test_only_start_bound_given() {
    let mut store = HistoryStore::new();
    store
        .ingest(&[json!([
            record("a", "2023-05-01T00:00:00Z", json!(60000)),
            record("b", "2023-05-09T00:00:00Z", json!(60000)),
        ])])
        .unwrap();

    let filter = ExportFilter::new().with_start(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
    let summary = export(&store, &filter);
    assert_eq!(summary.exported, 1);
    assert!(summary.output.contains("\"b\""));
}

#[test]
fn test_inverted_bounds_export_nothing() {
    let mut store = HistoryStore::new();
    store
        .ingest(&[json!([record("a", "2023-05-05T00:00:00Z", json!(60000))])])
        .unwrap();

    let filter = ExportFilter::new()
        .with_start_date("2023-06-01")
        .unwrap()
        .with_end_date("2023-05-01")
        .unwrap();
    let summary = export(&store, &filter);
    assert_eq!(summary.exported, 0);
    assert_eq!(summary.filtered, 1);
    assert_eq!(summary.output, "[]");
}

#[test]
fn test_large_history() {
    let records: Vec<Value> = (0..10_000)
        .rev()
        .map(|i| {
            let ts = chrono::DateTime::from_timestamp(1_672_531_200 + i * 60, 0)
                .unwrap()
                .to_rfc3339();
            record(&format!("t{}", i), &ts, json!(60000))
        })
        .collect();

    let mut store = HistoryStore::new();
    store.ingest(&[Value::Array(records)]).unwrap();

    assert_eq!(store.len(), 10_000);
    assert_eq!(store.events()[0].track(), "t0");
    assert_eq!(store.events()[9_999].track(), "t9999");
    assert_eq!(export(&store, &ExportFilter::new()).exported, 10_000);
}
