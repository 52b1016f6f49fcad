//! Export format types for the playpack library.
//!
//! [`ExportFormat`] names the consumer format an export is serialized into.
//! Only [`ScrubblerWpf`](ExportFormat::ScrubblerWpf) has a serializer today;
//! any other name is carried as [`Unimplemented`](ExportFormat::Unimplemented)
//! so callers that build formats from free-form input (a config file, a
//! dropdown) still get a value the exporter can reject gracefully.
//!
//! # Example
//!
//! ```rust
//! use playpack::format::ExportFormat;
//! use std::str::FromStr;
//!
//! let format = ExportFormat::from_str("scrubblerwpf").unwrap();
//! assert_eq!(format, ExportFormat::ScrubblerWpf);
//! assert_eq!(format.extension(), "json");
//!
//! // Strict parsing rejects unknown names...
//! assert!(ExportFormat::from_str("csv").is_err());
//! // ...lenient construction keeps them for the exporter to report.
//! assert_eq!(
//!     ExportFormat::named("csv"),
//!     ExportFormat::Unimplemented("csv".to_string())
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PlaypackError;

/// Output format for history exports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ExportFormat {
    /// JSON array understood by Last.fm-Scrubbler-WPF's file scrobbler.
    ///
    /// Each element carries `trackName`, `artistName`, `albumName` and `time`.
    #[default]
    ScrubblerWpf,

    /// A format name without a serializer.
    Unimplemented(String),
}

impl ExportFormat {
    /// Returns the canonical name of this format.
    pub fn name(&self) -> &str {
        match self {
            ExportFormat::ScrubblerWpf => "scrubblerwpf",
            ExportFormat::Unimplemented(name) => name,
        }
    }

    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::ScrubblerWpf => "json",
            ExportFormat::Unimplemented(_) => "txt",
        }
    }

    /// Returns all names with a serializer.
    pub fn all_names() -> &'static [&'static str] {
        &["scrubblerwpf"]
    }

    /// Builds a format from a name, keeping unknown names as
    /// [`Unimplemented`](ExportFormat::Unimplemented).
    pub fn named(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|_| ExportFormat::Unimplemented(name.to_string()))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = PlaypackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scrubblerwpf" => Ok(ExportFormat::ScrubblerWpf),
            _ => Err(PlaypackError::UnknownFormat {
                input: s.to_string(),
                expected: ExportFormat::all_names().join(", "),
            }),
        }
    }
}

impl From<String> for ExportFormat {
    fn from(name: String) -> Self {
        ExportFormat::named(&name)
    }
}

impl From<ExportFormat> for String {
    fn from(format: ExportFormat) -> String {
        format.name().to_string()
    }
}
