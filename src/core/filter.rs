//! Export filtering by date range and play duration.
//!
//! This module provides [`ExportFilter`] for defining which plays count as
//! scrobbles and [`DateBounds`] for the resolved date window.
//!
//! # Filter Rules
//!
//! | Filter | Method | Passes when |
//! |--------|--------|-------------|
//! | Start date | [`with_start_date`](ExportFilter::with_start_date) | play date is **after** the start date |
//! | End date | [`with_end_date`](ExportFilter::with_end_date) | play date is **before** the end date |
//! | Minimum seconds | [`with_min_seconds`](ExportFilter::with_min_seconds) | duration is **longer** than the threshold |
//!
//! All three comparisons are strict. To include a given day, pass the day
//! before it as the start (or the day after it as the end).
//!
//! # Example
//!
//! ```
//! use playpack::core::filter::ExportFilter;
//!
//! # fn main() -> playpack::Result<()> {
//! // Only plays on 2024-01-02, longer than 45 seconds
//! let filter = ExportFilter::new()
//!     .with_start_date("2024-01-01")?
//!     .with_end_date("2024-01-03")?
//!     .with_min_seconds(45);
//! # Ok(())
//! # }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::PlayEvent;
use crate::core::store::HistoryStore;
use crate::error::PlaypackError;
use crate::format::ExportFormat;

/// Plays of this many seconds or fewer are not scrobbles by default.
pub const DEFAULT_MIN_SECONDS: u64 = 30;

/// Parameters for a single export.
///
/// Unset date bounds default to one day outside the store's observed range,
/// so every stored play falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFilter {
    /// Exclusive lower date bound.
    pub start_date: Option<NaiveDate>,

    /// Exclusive upper date bound.
    pub end_date: Option<NaiveDate>,

    /// Plays must last strictly longer than this.
    pub min_duration_seconds: u64,

    /// Serialization target.
    pub format: ExportFormat,
}

impl Default for ExportFilter {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            min_duration_seconds: DEFAULT_MIN_SECONDS,
            format: ExportFormat::default(),
        }
    }
}

impl ExportFilter {
    /// Creates a filter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclusive start date from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`PlaypackError::InvalidDate`] if the format is invalid.
    pub fn with_start_date(mut self, date_str: &str) -> Result<Self, PlaypackError> {
        self.start_date = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the exclusive end date from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`PlaypackError::InvalidDate`] if the format is invalid.
    pub fn with_end_date(mut self, date_str: &str) -> Result<Self, PlaypackError> {
        self.end_date = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the exclusive start date directly.
    #[must_use]
    pub fn with_start(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the exclusive end date directly.
    #[must_use]
    pub fn with_end(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the minimum play length in seconds.
    #[must_use]
    pub fn with_min_seconds(mut self, seconds: u64) -> Self {
        self.min_duration_seconds = seconds;
        self
    }

    /// Sets the export format.
    #[must_use]
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Minimum duration in milliseconds; a play must exceed it.
    pub fn min_duration_ms(&self) -> u64 {
        self.min_duration_seconds.saturating_mul(1000)
    }

    /// Resolves the date window against a store, filling unset bounds.
    pub fn resolve_bounds(&self, store: &HistoryStore) -> DateBounds {
        let defaults = DateBounds::enclosing(store.earliest_date(), store.latest_date());
        DateBounds {
            start: self.start_date.unwrap_or(defaults.start),
            end: self.end_date.unwrap_or(defaults.end),
        }
    }

    /// Returns `true` if the event is long enough to count.
    pub fn passes_duration(&self, event: &PlayEvent) -> bool {
        event.duration_ms() > self.min_duration_ms()
    }
}

/// An exclusive date window: `start < date < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    /// Exclusive lower bound.
    pub start: NaiveDate,
    /// Exclusive upper bound.
    pub end: NaiveDate,
}

impl DateBounds {
    /// The narrowest exclusive window containing every date in `first..=last`.
    ///
    /// Saturates at `NaiveDate::MIN` / `NaiveDate::MAX`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use playpack::core::filter::DateBounds;
    ///
    /// let first = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
    /// let last = NaiveDate::from_ymd_opt(2023, 5, 10).unwrap();
    /// let bounds = DateBounds::enclosing(first, last);
    ///
    /// assert_eq!(bounds.start.to_string(), "2023-04-30");
    /// assert_eq!(bounds.end.to_string(), "2023-05-11");
    /// assert!(bounds.contains(first) && bounds.contains(last));
    /// ```
    pub fn enclosing(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: first.pred_opt().unwrap_or(NaiveDate::MIN),
            end: last.succ_opt().unwrap_or(NaiveDate::MAX),
        }
    }

    /// Returns `true` if `date` lies strictly between the bounds.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start < date && date < self.end
    }
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate, PlaypackError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| PlaypackError::invalid_date(date_str))
}
