use chrono::{Datelike, NaiveDate};

use super::Month;

/// Artist name substituted when the export carries none for a track.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One track entry extracted from the library export.
///
/// A record only exists when the export carried both an album title and a
/// release date that parsed; everything else is defaulted. Records are
/// immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    /// Album title, exactly as written in the export (surrounding
    /// whitespace trimmed)
    pub album: String,

    /// Artist name, or [`UNKNOWN_ARTIST`] when the export had none
    pub artist: String,

    /// Release date, normalized from the export's timestamp text
    pub release_date: NaiveDate,

    /// Cumulative play count; 0 when the export had none
    pub play_count: u32,
}

impl TrackRecord {
    /// Release year, derived from `release_date`
    pub fn year(&self) -> i32 {
        self.release_date.year()
    }

    /// Release month, derived from `release_date`
    pub fn month(&self) -> Month {
        Month::ALL[self.release_date.month0() as usize]
    }
}
