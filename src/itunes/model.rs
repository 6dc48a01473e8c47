//! Internal staging structures for the plist scan

/// Field values gathered while scanning one track dictionary, before the
/// required-field check and date parsing decide whether a record survives.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawTrack {
    pub album: Option<String>,
    pub artist: Option<String>,
    /// Raw timestamp text; parsed in a later pass
    pub release_date: Option<String>,
    pub play_count: Option<u32>,
}

/// The four dictionary keys the extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldKey {
    Album,
    Artist,
    ReleaseDate,
    PlayCount,
}

impl FieldKey {
    /// Map a `<key>` element's text to a field of interest, if it is one.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Album" => Some(FieldKey::Album),
            "Artist" => Some(FieldKey::Artist),
            "Release Date" => Some(FieldKey::ReleaseDate),
            "Play Count" => Some(FieldKey::PlayCount),
            _ => None,
        }
    }
}

impl RawTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a captured value under a field of interest. A later occurrence
    /// of the same key overwrites the earlier one, as in the source format.
    pub fn set(&mut self, key: FieldKey, text: String) {
        match key {
            FieldKey::Album => self.album = Some(text),
            FieldKey::Artist => self.artist = Some(text),
            FieldKey::ReleaseDate => self.release_date = Some(text),
            // Unparsable counts fall back to None and default to 0 later,
            // the same path as a missing count
            FieldKey::PlayCount => self.play_count = text.parse().ok(),
        }
    }

    /// Whether both required fields were present as text. Date validity is
    /// checked afterwards.
    pub fn has_required_fields(&self) -> bool {
        self.album.is_some() && self.release_date.is_some()
    }
}
