//! Output format writers.
//!
//! - [`to_scrubbler_json`] - JSON array for Last.fm-Scrubbler-WPF's file
//!   scrobbler
//!
//! Writers serialize whatever events they are given; filtering happens in
//! [`export`](crate::core::export). Writing the result to disk is
//! [`input::write_output`](crate::input::write_output).

mod scrubbler_writer;

pub use scrubbler_writer::to_scrubbler_json;
