//! Run configuration for a merge-and-export pass.
//!
//! [`RunConfig`] is the library-side description of one run: which exports
//! to read, how to filter them and where the result goes. It has no CLI
//! framework dependency, so front ends other than the bundled binary can
//! build one directly.
//!
//! # Example
//!
//! ```rust
//! use playpack::config::RunConfig;
//!
//! # fn main() -> playpack::Result<()> {
//! let config = RunConfig::new(vec!["endsong_0.json".into()])
//!     .with_output("scrobbles.json")
//!     .with_start_date("2023-01-01")?
//!     .with_min_seconds(45);
//!
//! let filter = config.filter();
//! assert_eq!(filter.min_duration_seconds, 45);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::filter::{DEFAULT_MIN_SECONDS, ExportFilter, parse_date};
use crate::error::{PlaypackError, Result};
use crate::format::ExportFormat;

/// Everything needed to run one merge-and-export pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// History export files, read in order.
    pub inputs: Vec<PathBuf>,

    /// Output file; stdout when `None`.
    pub output: Option<PathBuf>,

    /// Export format (default: scrubblerwpf)
    pub format: ExportFormat,

    /// Exclusive start date; defaults to the day before the first play.
    pub start_date: Option<NaiveDate>,

    /// Exclusive end date; defaults to the day after the last play.
    pub end_date: Option<NaiveDate>,

    /// Minimum seconds for a play to count (default: 30)
    pub min_seconds: u64,

    /// Only report the earliest and latest play dates.
    pub date_range_only: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: None,
            format: ExportFormat::default(),
            start_date: None,
            end_date: None,
            min_seconds: DEFAULT_MIN_SECONDS,
            date_range_only: false,
        }
    }
}

impl RunConfig {
    /// Creates a configuration reading `inputs` with default settings.
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Sets the output file.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Sets the export format.
    #[must_use]
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the exclusive start date from a `YYYY-MM-DD` string.
    pub fn with_start_date(mut self, date_str: &str) -> Result<Self> {
        self.start_date = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the exclusive end date from a `YYYY-MM-DD` string.
    pub fn with_end_date(mut self, date_str: &str) -> Result<Self> {
        self.end_date = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the minimum play length in seconds.
    #[must_use]
    pub fn with_min_seconds(mut self, seconds: u64) -> Self {
        self.min_seconds = seconds;
        self
    }

    /// Enables or disables date-range-only mode.
    #[must_use]
    pub fn with_date_range_only(mut self, enabled: bool) -> Self {
        self.date_range_only = enabled;
        self
    }

    /// Checks that there is at least one input and that every input exists.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(PlaypackError::invalid_argument("specify at least one file"));
        }

        if let Some((index, path)) = self
            .inputs
            .iter()
            .enumerate()
            .find(|(_, path)| !path.exists())
        {
            return Err(PlaypackError::FileNotFound {
                index,
                path: path.clone(),
            });
        }

        Ok(())
    }

    /// Builds the export filter for this run.
    pub fn filter(&self) -> ExportFilter {
        ExportFilter {
            start_date: self.start_date,
            end_date: self.end_date,
            min_duration_seconds: self.min_seconds,
            format: self.format.clone(),
        }
    }
}
