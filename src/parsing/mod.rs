//! Record validation for raw history exports.
//!
//! This module turns loosely-typed JSON records into [`PlayEvent`]s, deciding
//! for each record whether it is accepted, tolerated as rejected, or fatal.
//!
//! [`PlayEvent`]: crate::PlayEvent

pub mod streaming_history;

pub use streaming_history::{
    RecordOutcome, RejectReason, parse_history_record, parse_history_timestamp,
};
