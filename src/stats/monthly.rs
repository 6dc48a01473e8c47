use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::model::{Month, TrackRecord};

/// How many albums each month's ranking keeps.
pub const TOP_ALBUMS_PER_MONTH: usize = 5;

/// One row of the monthly top-albums table.
///
/// Serialized field names are the column names the presentation layer
/// renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTopAlbum {
    #[serde(rename = "Month")]
    pub month: Month,

    #[serde(rename = "Rank")]
    pub rank: u32,

    #[serde(rename = "Artist")]
    pub artist: String,

    #[serde(rename = "Album")]
    pub album: String,

    #[serde(rename = "Total Plays")]
    pub total_plays: u64,
}

/// Rank each month's most-played albums for the reference date's year.
///
/// Tracks are filtered to the reference year by release date, grouped per
/// calendar month by `(album, artist)` with play counts summed, and the
/// five largest totals per month are kept with dense ranks from 1. Months
/// without qualifying tracks produce no rows. Equal totals order by album
/// title, then artist, so runs are reproducible.
pub fn top_albums_current_year(
    tracks: &[TrackRecord],
    reference_date: NaiveDate,
) -> Vec<MonthlyTopAlbum> {
    let current_year = reference_date.year();

    // month -> (album, artist) -> summed plays
    let mut plays: BTreeMap<Month, HashMap<(&str, &str), u64>> = BTreeMap::new();
    for track in tracks {
        if track.year() != current_year {
            continue;
        }
        *plays
            .entry(track.month())
            .or_default()
            .entry((track.album.as_str(), track.artist.as_str()))
            .or_insert(0) += u64::from(track.play_count);
    }

    let mut rows = Vec::new();
    for (month, totals) in plays {
        let mut ranked: Vec<((&str, &str), u64)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(TOP_ALBUMS_PER_MONTH);

        for (position, ((album, artist), total_plays)) in ranked.into_iter().enumerate() {
            rows.push(MonthlyTopAlbum {
                month,
                rank: position as u32 + 1,
                artist: artist.to_string(),
                album: album.to_string(),
                total_plays,
            });
        }
    }

    rows
}
