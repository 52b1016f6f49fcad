//! Normalized play event.
//!
//! This module provides [`PlayEvent`], one recorded instance of a track being
//! played. Raw streaming history records are validated into this type by
//! [`parsing`](crate::parsing); everything downstream (the history store, the
//! exporter) only ever sees `PlayEvent`s.
//!
//! # Examples
//!
//! ```
//! use playpack::PlayEvent;
//! use chrono::{TimeZone, Utc};
//!
//! let played_at = Utc.with_ymd_and_hms(2023, 6, 1, 20, 15, 0).unwrap();
//! let event = PlayEvent::new("TOKYO NEON", "Mili", played_at, 213_000)
//!     .with_album("Key Ingredient");
//!
//! assert_eq!(event.track(), "TOKYO NEON");
//! assert_eq!(event.album(), Some("Key Ingredient"));
//! assert_eq!(event.played_on().to_string(), "2023-06-01");
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One play of a track, as recorded by the streaming service.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `track` | `String` | Track title |
/// | `album` | `Option<String>` | Album title, absent for some podcasts and local files |
/// | `album_artist` | `String` | Album artist credited for the play |
/// | `played_at` | `DateTime<Utc>` | When the play ended |
/// | `duration_ms` | `u64` | How long the track was played, in milliseconds |
///
/// Fields are private: events are immutable once constructed, and the
/// builder methods consume and return `self`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayEvent {
    /// Track title.
    track: String,

    /// Album title.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    album: Option<String>,

    /// Album artist.
    album_artist: String,

    /// Play timestamp, normalized to UTC.
    played_at: DateTime<Utc>,

    /// Play duration in milliseconds.
    duration_ms: u64,
}

impl PlayEvent {
    /// Creates a new event without an album.
    pub fn new(
        track: impl Into<String>,
        album_artist: impl Into<String>,
        played_at: DateTime<Utc>,
        duration_ms: u64,
    ) -> Self {
        Self {
            track: track.into(),
            album: None,
            album_artist: album_artist.into(),
            played_at,
            duration_ms,
        }
    }

    /// Builder method to set the album.
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the track title.
    pub fn track(&self) -> &str {
        &self.track
    }

    /// Returns the album title, if known.
    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    /// Returns the album artist.
    pub fn album_artist(&self) -> &str {
        &self.album_artist
    }

    /// Returns the play timestamp.
    pub fn played_at(&self) -> DateTime<Utc> {
        self.played_at
    }

    /// Returns the play duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns the UTC calendar date of the play.
    pub fn played_on(&self) -> NaiveDate {
        self.played_at.date_naive()
    }
}
