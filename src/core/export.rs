//! Filter-and-serialize export of a [`HistoryStore`].
//!
//! # Example
//!
//! ```
//! use playpack::core::{ExportFilter, HistoryStore, export};
//! use serde_json::json;
//!
//! # fn main() -> playpack::Result<()> {
//! let mut store = HistoryStore::new();
//! store.ingest(&[json!([
//!     {"ts": "2023-06-01T10:00:00Z", "ms_played": 5000,
//!      "master_metadata_track_name": "Skipped", "master_metadata_album_artist_name": "X"},
//!     {"ts": "2023-06-01T10:05:00Z", "ms_played": 40000,
//!      "master_metadata_track_name": "Played", "master_metadata_album_artist_name": "X"},
//! ])])?;
//!
//! let summary = export(&store, &ExportFilter::new().with_min_seconds(10));
//! assert_eq!(summary.exported, 1);
//! assert_eq!(summary.filtered, 1);
//! assert!(summary.output.contains("\"trackName\":\"Played\""));
//! # Ok(())
//! # }
//! ```

use tracing::{debug, error};

use crate::PlayEvent;
use crate::core::filter::{DateBounds, ExportFilter};
use crate::core::output::to_scrubbler_json;
use crate::core::store::HistoryStore;
use crate::format::ExportFormat;

/// Result of an export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportSummary {
    /// Plays that passed both filters.
    pub exported: usize,
    /// Plays that failed at least one filter.
    pub filtered: usize,
    /// Serialized output.
    pub output: String,
}

/// Exports the plays of `store` selected by `filter`.
///
/// A play is exported when its date lies strictly inside the resolved
/// [`DateBounds`] and it lasted strictly longer than the minimum duration.
///
/// This never fails: an [`Unimplemented`](ExportFormat::Unimplemented) format
/// or a serializer error is logged and yields an empty summary.
pub fn export(store: &HistoryStore, filter: &ExportFilter) -> ExportSummary {
    let bounds = filter.resolve_bounds(store);

    match &filter.format {
        ExportFormat::ScrubblerWpf => {
            let (selected, filtered) = select(store.events(), filter, bounds);
            match to_scrubbler_json(selected.iter().copied()) {
                Ok(output) => {
                    debug!(exported = selected.len(), filtered, "export finished");
                    ExportSummary {
                        exported: selected.len(),
                        filtered,
                        output,
                    }
                }
                Err(e) => {
                    error!(error = %e, "takeout: failed to serialize export");
                    ExportSummary::default()
                }
            }
        }
        ExportFormat::Unimplemented(name) => {
            error!(format = %name, "takeout: unimplemented format");
            ExportSummary::default()
        }
    }
}

/// Splits events into those passing every filter and a count of the rest.
fn select<'a>(
    events: &'a [PlayEvent],
    filter: &ExportFilter,
    bounds: DateBounds,
) -> (Vec<&'a PlayEvent>, usize) {
    let mut selected = Vec::with_capacity(events.len());
    let mut filtered = 0;

    for event in events {
        if bounds.contains(event.played_on()) && filter.passes_duration(event) {
            selected.push(event);
        } else {
            filtered += 1;
        }
    }

    (selected, filtered)
}
