//! # Playpack
//!
//! A Rust library for merging Spotify extended streaming history exports into
//! a single, time-ordered listening history and re-exporting it for
//! scrobbling tools.
//!
//! ## Overview
//!
//! Streaming history arrives as several overlapping JSON files
//! (`endsong_0.json`, `endsong_1.json`, ...). Playpack:
//!
//! - validates each record, skipping incomplete ones (podcasts, ads, offline
//!   markers) and refusing malformed ones
//! - keeps every accepted play in one chronologically sorted store
//! - tracks the earliest and latest play date
//! - exports the plays inside a date window and above a minimum duration in a
//!   scrobbler format
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use playpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let batches = load_batches(&["endsong_0.json", "endsong_1.json"])?;
//!
//!     let mut store = HistoryStore::new();
//!     let report = store.ingest(&batches)?;
//!     println!("{} plays ({} skipped)", report.accepted, report.rejected);
//!
//!     let filter = ExportFilter::new()
//!         .with_start_date("2022-12-31")?
//!         .with_min_seconds(30);
//!     let summary = export(&store, &filter);
//!
//!     write_output(&summary.output, Some("scrobbles.json".as_ref()))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`core`] — Store, filtering and export
//!   - [`core::store`] — [`HistoryStore`](core::HistoryStore), ingestion
//!   - [`core::filter`] — [`ExportFilter`](core::ExportFilter), [`DateBounds`](core::DateBounds)
//!   - [`core::export`](mod@core::export) — [`export`](core::export()), [`ExportSummary`](core::ExportSummary)
//!   - [`core::output`] — Format writers
//! - [`parsing`] — Raw record validation
//! - [`format`] — [`ExportFormat`](format::ExportFormat)
//! - [`config`] — [`RunConfig`](config::RunConfig)
//! - [`input`] — Reading exports from disk, writing results
//! - [`cli`] — CLI arguments (requires the `cli` feature)
//! - [`error`] — Unified error types ([`PlaypackError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod format;
pub mod input;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{PlaypackError, Result};
pub use event::PlayEvent;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use playpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::PlayEvent;

    // Error types
    pub use crate::error::{PlaypackError, Result};

    // Store and export
    pub use crate::core::{
        DateBounds, ExportFilter, ExportSummary, HistoryStore, IngestReport, export,
    };

    // Output
    pub use crate::core::output::to_scrubbler_json;

    // Formats and configuration
    pub use crate::config::RunConfig;
    pub use crate::format::ExportFormat;

    // File layer
    pub use crate::input::{load_batches, write_output};
}
