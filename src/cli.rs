//! Command-line interface definition using clap.
//!
//! [`Args`] mirrors the flags of the `playpack` binary and converts into a
//! library-side [`RunConfig`] with [`Args::into_config`].

use std::path::PathBuf;

use clap::Parser;

use crate::config::RunConfig;
use crate::core::filter::DEFAULT_MIN_SECONDS;
use crate::error::{PlaypackError, Result};
use crate::format::ExportFormat;

/// Process Spotify extended streaming history into a single
/// Last.fm-Scrubbler-friendly JSON file.
#[derive(Parser, Debug, Clone)]
#[command(name = "playpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    playpack endsong_0.json endsong_1.json -o scrobbles.json
    playpack endsong_*.json --get-date-boundary
    playpack endsong_*.json --ds 2022-12-31 --de 2024-01-01 --ms 45

Both date bounds are exclusive: --ds 2022-12-31 starts with plays on 2023-01-01.")]
pub struct Args {
    /// endsong_*.json files
    #[arg(value_name = "FILES", help_heading = "Input/output options")]
    pub files: Vec<PathBuf>,

    /// File to output to (defaults to stdout)
    #[arg(short, long, value_name = "PATH", help_heading = "Input/output options")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(
        short,
        long,
        default_value = "scrubblerwpf",
        value_parser = parse_format,
        help_heading = "Input/output options"
    )]
    pub format: ExportFormat,

    /// Prints date boundaries to stdout
    #[arg(long = "get-date-boundary", help_heading = "Filtering options")]
    pub get_date_boundary: bool,

    /// Exclusive start date, YYYY-MM-DD (defaults to the day before the first play)
    #[arg(long = "ds", value_name = "DATE", help_heading = "Filtering options")]
    pub start_date: Option<String>,

    /// Exclusive end date, YYYY-MM-DD (defaults to the day after the last play)
    #[arg(long = "de", value_name = "DATE", help_heading = "Filtering options")]
    pub end_date: Option<String>,

    /// Minimum number of seconds before a partial play counts as a scrobble
    #[arg(long = "ms", value_name = "SECONDS", default_value_t = DEFAULT_MIN_SECONDS, help_heading = "Filtering options")]
    pub min_seconds: u64,
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, PlaypackError> {
    s.parse()
}

/// Converts a clap parse failure into [`PlaypackError::InvalidArgument`],
/// so usage errors exit with code 1 like every other argument error.
///
/// Only the first line of clap's message is kept, without its `error: `
/// prefix.
pub fn usage_error(err: &clap::Error) -> PlaypackError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    PlaypackError::invalid_argument(first_line.trim_start_matches("error: ").trim())
}

impl Args {
    /// Validates the arguments and builds a [`RunConfig`].
    ///
    /// Dates are checked first, then the input list.
    pub fn into_config(self) -> Result<RunConfig> {
        let mut config = RunConfig::new(self.files)
            .with_format(self.format)
            .with_min_seconds(self.min_seconds)
            .with_date_range_only(self.get_date_boundary);

        if let Some(output) = self.output {
            config = config.with_output(output);
        }
        if let Some(ref start) = self.start_date {
            config = config.with_start_date(start)?;
        }
        if let Some(ref end) = self.end_date {
            config = config.with_end_date(end)?;
        }

        config.validate()?;
        Ok(config)
    }
}
