//! Core processing logic for playpack.
//!
//! This module contains:
//! - [`store`] - The time-ordered [`HistoryStore`] and ingestion
//! - [`filter`] - Export filtering by date range and duration
//! - [`export`](mod@export) - Filter-and-serialize export
//! - [`output`] - Format writers
//!
//! # Quick Start
//!
//! ```rust
//! use playpack::core::{ExportFilter, HistoryStore, export};
//!
//! let store = HistoryStore::new();
//! let summary = export(&store, &ExportFilter::new());
//! assert_eq!(summary.output, "[]");
//! ```

pub mod export;
pub mod filter;
pub mod output;
pub mod store;

// Re-export main types for convenience
pub use export::{ExportSummary, export};
pub use filter::{DEFAULT_MIN_SECONDS, DateBounds, ExportFilter};
pub use output::to_scrubbler_json;
pub use store::{HistoryStore, IngestReport};

// Re-export PlayEvent from the crate root
pub use crate::PlayEvent;
