use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::model::TrackRecord;

/// One row of the albums-per-year table.
///
/// Serialized field names are the column names the presentation layer
/// charts against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlbumYearCount {
    #[serde(rename = "Year")]
    pub year: i32,

    #[serde(rename = "Album Count")]
    pub album_count: usize,
}

/// Count distinct album titles per release year.
///
/// One row per year that appears in the table, in ascending year order.
/// Album identity is exact string equality, so duplicate tracks from the
/// same album never inflate a year's count.
pub fn count_albums_by_year(tracks: &[TrackRecord]) -> Vec<AlbumYearCount> {
    let mut albums_by_year: BTreeMap<i32, HashSet<&str>> = BTreeMap::new();

    for track in tracks {
        albums_by_year
            .entry(track.year())
            .or_default()
            .insert(track.album.as_str());
    }

    albums_by_year
        .into_iter()
        .map(|(year, albums)| AlbumYearCount {
            year,
            album_count: albums.len(),
        })
        .collect()
}
