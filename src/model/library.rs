use super::TrackRecord;

/// The extracted track table.
///
/// A flat, immutable-after-extraction sequence of records. An empty library
/// is a fully valid input to both aggregations, which is how unreadable or
/// malformed exports degrade.
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: Vec<TrackRecord>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Build a library from extracted records
    pub fn from_tracks(tracks: Vec<TrackRecord>) -> Self {
        Self { tracks }
    }

    /// All tracks, in extraction order
    pub fn tracks(&self) -> &[TrackRecord] {
        &self.tracks
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the library holds no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
