//! Last.fm-Scrubbler-WPF JSON writer.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

use crate::PlayEvent;
use crate::error::PlaypackError;

/// One scrobble as the Scrubbler's file import expects it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrubblerEntry<'a> {
    track_name: &'a str,
    artist_name: &'a str,
    album_name: Option<&'a str>,
    time: String,
}

impl<'a> ScrubblerEntry<'a> {
    fn from_event(event: &'a PlayEvent) -> Self {
        Self {
            track_name: event.track(),
            artist_name: event.album_artist(),
            album_name: event.album(),
            time: scrubbler_time(event.played_at()),
        }
    }
}

/// Formats a timestamp the way the Scrubbler reads it.
///
/// ISO-8601 without offset, microseconds only when non-zero, then a literal `Z`.
fn scrubbler_time(ts: DateTime<Utc>) -> String {
    let naive = ts.naive_utc();
    if naive.nanosecond() / 1000 == 0 {
        format!("{}Z", naive.format("%Y-%m-%dT%H:%M:%S"))
    } else {
        format!("{}Z", naive.format("%Y-%m-%dT%H:%M:%S%.6f"))
    }
}

/// Converts events to a compact Scrubbler JSON array.
///
/// # Format
/// ```json
/// [{"trackName":"TOKYO NEON","artistName":"Mili","albumName":"Key Ingredient","time":"2023-06-01T20:15:00Z"}]
/// ```
pub fn to_scrubbler_json<'a, I>(events: I) -> Result<String, PlaypackError>
where
    I: IntoIterator<Item = &'a PlayEvent>,
{
    let entries: Vec<ScrubblerEntry<'a>> = events
        .into_iter()
        .map(ScrubblerEntry::from_event)
        .collect();

    Ok(serde_json::to_string(&entries)?)
}
