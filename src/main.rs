//! # playpack CLI
//!
//! Command-line interface for playpack library.

use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use playpack::PlaypackError;
use playpack::cli::{Args, usage_error};
use playpack::core::{HistoryStore, export};
use playpack::input::{load_batches, write_output};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Diagnostics go to stderr; stdout may carry the export.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), PlaypackError> {
    let args = match <Args as ClapParser>::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(usage_error(&e)),
    };
    let config = args.into_config()?;

    let batches = load_batches(&config.inputs)?;

    let mut store = HistoryStore::new();
    let report = store.ingest(&batches)?;
    eprintln!(
        "note: processed {} ({} failed)",
        report.accepted, report.rejected
    );

    if config.date_range_only {
        eprintln!("note: is in format [earliest, latest]");
        match store.date_range() {
            Some((earliest, latest)) => println!("['{}', '{}']", earliest, latest),
            None => println!("[]"),
        }
        return Ok(());
    }

    let summary = export(&store, &config.filter());
    write_output(&summary.output, config.output.as_deref())?;

    eprintln!(
        "note: takeout: exported {} scrobbles (filtered {})",
        summary.exported, summary.filtered
    );

    Ok(())
}
