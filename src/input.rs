//! Reading history exports from disk and writing the result.
//!
//! The core never touches the filesystem; this module is the layer that
//! turns paths into parsed JSON batches and delivers the export string.
//!
//! # Example
//!
//! ```rust,no_run
//! use playpack::input::{load_batches, write_output};
//! use playpack::core::{ExportFilter, HistoryStore, export};
//!
//! # fn main() -> playpack::Result<()> {
//! let batches = load_batches(&["endsong_0.json", "endsong_1.json"])?;
//!
//! let mut store = HistoryStore::new();
//! store.ingest(&batches)?;
//!
//! let summary = export(&store, &ExportFilter::new());
//! write_output(&summary.output, Some("scrobbles.json".as_ref()))?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{PlaypackError, ReadErrorKind, Result};

/// Reads one file and parses it as JSON.
pub fn load_batch(path: &Path) -> std::result::Result<Value, ReadErrorKind> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Reads every file in order.
///
/// # Errors
///
/// - [`PlaypackError::FileNotFound`] if a path does not exist
/// - [`PlaypackError::Read`] if a file cannot be read or is not valid JSON
///
/// Both carry the position of the failing path.
pub fn load_batches<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Value>> {
    let mut batches = Vec::with_capacity(paths.len());

    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PlaypackError::FileNotFound {
                index,
                path: path.to_path_buf(),
            });
        }

        let batch = load_batch(path).map_err(|e| PlaypackError::read(index, path, e))?;
        debug!(path = %path.display(), "loaded history file");
        batches.push(batch);
    }

    Ok(batches)
}

/// Writes the export to `destination`, or to stdout followed by a newline.
pub fn write_output(output: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => fs::write(path, output)?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", output)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
