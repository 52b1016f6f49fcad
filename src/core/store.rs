//! Time-ordered history store.
//!
//! [`HistoryStore`] accumulates [`PlayEvent`]s from any number of streaming
//! history exports and keeps them sorted by play time. Exports routinely
//! overlap and arrive in no particular order; the store does not care.
//!
//! # Example
//!
//! ```
//! use playpack::core::HistoryStore;
//! use serde_json::json;
//!
//! # fn main() -> playpack::Result<()> {
//! let batch = json!([
//!     {"ts": "2023-06-02T10:00:00Z", "ms_played": 60000,
//!      "master_metadata_track_name": "B", "master_metadata_album_artist_name": "X"},
//!     {"ts": "2023-06-01T10:00:00Z", "ms_played": 60000,
//!      "master_metadata_track_name": "A", "master_metadata_album_artist_name": "X"},
//!     {"ts": "2023-06-03T10:00:00Z", "ms_played": 0,
//!      "master_metadata_track_name": null, "master_metadata_album_artist_name": null},
//! ]);
//!
//! let mut store = HistoryStore::new();
//! let report = store.ingest(&[batch])?;
//!
//! assert_eq!(report.accepted, 2);
//! assert_eq!(report.rejected, 1);
//! assert_eq!(store.events()[0].track(), "A");
//! assert_eq!(store.earliest_date().to_string(), "2023-06-01");
//! assert_eq!(store.latest_date().to_string(), "2023-06-02");
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, trace};

use crate::PlayEvent;
use crate::error::{PlaypackError, Result};
use crate::parsing::{RecordOutcome, parse_history_record};

/// Counts returned by a successful [`HistoryStore::ingest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Events held by the store after the call (cumulative).
    pub accepted: usize,
    /// Records skipped during this call.
    pub rejected: usize,
}

/// In-memory listening history, sorted by play time.
///
/// Invariants:
/// - `events` is non-decreasing by `played_at`
/// - events with equal timestamps keep the order they were ingested in
/// - duplicates are kept
///
/// Until the first event arrives, [`earliest_date`](Self::earliest_date) is
/// `NaiveDate::MIN` and [`latest_date`](Self::latest_date) is `NaiveDate::MAX`.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    events: Vec<PlayEvent>,
    earliest_date: NaiveDate,
    latest_date: NaiveDate,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            earliest_date: NaiveDate::MIN,
            latest_date: NaiveDate::MAX,
        }
    }
}

impl HistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and merges one or more history batches into the store.
    ///
    /// Each batch must be a JSON array of records. Incomplete records are
    /// counted in [`IngestReport::rejected`] and skipped. A record with a
    /// malformed timestamp or duration aborts the whole call, and the store
    /// is left exactly as it was.
    pub fn ingest(&mut self, batches: &[Value]) -> Result<IngestReport> {
        let mut incoming = Vec::new();
        let mut rejected = 0;

        for (batch_index, batch) in batches.iter().enumerate() {
            let records = batch.as_array().ok_or_else(|| {
                PlaypackError::invalid_format(
                    "streaming history",
                    format!("batch {} is not a JSON array", batch_index),
                )
            })?;

            for (record_index, raw) in records.iter().enumerate() {
                match parse_history_record(raw, batch_index, record_index)? {
                    RecordOutcome::Accepted(event) => incoming.push(event),
                    RecordOutcome::Rejected(reason) => {
                        trace!(batch = batch_index, record = record_index, %reason, "skipping record");
                        rejected += 1;
                    }
                }
            }
        }

        let added = incoming.len();
        self.merge(incoming);

        debug!(added, rejected, total = self.events.len(), "ingested history");

        Ok(IngestReport {
            accepted: self.events.len(),
            rejected,
        })
    }

    /// Like [`ingest`](Self::ingest), flattened into
    /// `(result code, error message, accepted, rejected)`.
    ///
    /// A non-zero result code means failure; the counts are then zero.
    pub fn ingest_status(&mut self, batches: &[Value]) -> (i32, String, usize, usize) {
        match self.ingest(batches) {
            Ok(report) => (0, String::new(), report.accepted, report.rejected),
            Err(e) => (e.exit_code(), e.to_string(), 0, 0),
        }
    }

    /// Stable merge of new events behind existing ones with equal timestamps.
    fn merge(&mut self, incoming: Vec<PlayEvent>) {
        if incoming.is_empty() {
            return;
        }

        self.events.extend(incoming);
        self.events.sort_by_key(PlayEvent::played_at);

        if let (Some(first), Some(last)) = (self.events.first(), self.events.last()) {
            self.earliest_date = first.played_on();
            self.latest_date = last.played_on();
        }
    }

    /// Returns the events in play order.
    pub fn events(&self) -> &[PlayEvent] {
        &self.events
    }

    /// Returns the number of events held.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Date of the earliest play, or `NaiveDate::MIN` while empty.
    pub fn earliest_date(&self) -> NaiveDate {
        self.earliest_date
    }

    /// Date of the latest play, or `NaiveDate::MAX` while empty.
    pub fn latest_date(&self) -> NaiveDate {
        self.latest_date
    }

    /// Returns `(earliest, latest)` once at least one event is held.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.is_empty() {
            None
        } else {
            Some((self.earliest_date, self.latest_date))
        }
    }
}
