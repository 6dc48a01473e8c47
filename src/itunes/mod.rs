//! iTunes library (plist XML) parsing
//!
//! Extracts the track table from an iTunes XML export. Only four fields
//! are read per track: Album, Artist, Release Date, and Play Count.

mod dates;
mod extractor;
mod model;

pub use extractor::{extract_tracks, ExtractError};

use crate::model::Library;
use std::path::Path;

/// Parse a library export into the track table.
///
/// Degrades to an empty library when the export is missing or malformed;
/// an empty library is a valid input to both aggregations, so the caller
/// never has to handle a failure state.
pub fn parse_library(path: &Path) -> Library {
    match extractor::extract_tracks(path) {
        Ok(tracks) => Library::from_tracks(tracks),
        Err(err) => {
            log::warn!("No tracks loaded from {:?}: {}", path, err);
            Library::new()
        }
    }
}
