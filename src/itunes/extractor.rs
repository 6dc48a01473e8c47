//! iTunes library XML parser
//!
//! The export is a plist document: dictionaries encode their fields as
//! ordered sibling pairs, a `<key>` element naming the field followed by one
//! value element of arbitrary tag. The scan walks the document once,
//! pairing keys with the value sibling that follows them.

use super::dates;
use super::model::{FieldKey, RawTrack};
use crate::model::{TrackRecord, UNKNOWN_ARTIST};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce any track table at all.
///
/// Individual bad entries are not errors; they are skipped during the scan.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The export could not be opened
    #[error("cannot open library export {path:?}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export is not well-formed XML
    #[error("library export is not well-formed XML (byte {position})")]
    MalformedDocument {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// The export ended with elements still open. The reader does not
    /// flag missing end tags on its own, so a partially written export
    /// would otherwise pass as a short but valid document.
    #[error("library export is truncated (ended inside an open element)")]
    TruncatedDocument { position: u64 },
}

// Element depths in the expected shape: the root element at 1, the library
// dictionary at 2, the track container at 3, one dictionary per track at 4,
// and the key/value children of a track at 5.
const LIBRARY_DEPTH: usize = 2;
const CONTAINER_DEPTH: usize = 3;
const TRACK_DEPTH: usize = 4;
const FIELD_DEPTH: usize = 5;

/// Pairing state while scanning the children of one track dictionary.
///
/// Either the scan waits for the next `<key>`, or it holds the key just
/// seen until the value sibling closes. Keys outside the four of interest
/// still consume a value slot, so the pairing never drifts.
#[derive(Debug)]
enum PairState {
    /// Between pairs; the next `<key>` starts one
    AwaitingKey,
    /// Inside a `<key>` element, collecting the field name
    ReadingKey(Option<String>),
    /// Key complete; the next sibling element carries its value
    AwaitingValue(Option<FieldKey>),
    /// Inside the value element for the held key
    ReadingValue(Option<FieldKey>, Option<String>),
}

impl PairState {
    /// Consume the held key, if any, resetting the pairing.
    fn take_pending(&mut self) -> Option<FieldKey> {
        match std::mem::replace(self, PairState::AwaitingKey) {
            PairState::AwaitingValue(field) => field,
            _ => None,
        }
    }
}

/// Parse a library export and extract all track records.
///
/// Fails only when the whole document is unusable (unreadable path,
/// malformed or truncated XML); a document of the wrong shape yields an
/// empty table.
pub fn extract_tracks(path: &Path) -> Result<Vec<TrackRecord>, ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.config_mut().trim_text(true);

    let candidates = scan_document(&mut reader)?;
    let tracks = normalize(candidates);

    log::info!("Extracted {} tracks from {:?}", tracks.len(), path);
    Ok(tracks)
}

/// Walk the document and gather candidate entries from the first track
/// container (the first dictionary nested directly inside the library
/// dictionary). The scan runs to end-of-file even after the container
/// closes: malformed markup anywhere in the document voids the parse, and
/// so does an end-of-file that leaves elements open.
fn scan_document<R: BufRead>(reader: &mut Reader<R>) -> Result<Vec<RawTrack>, ExtractError> {
    let mut candidates = Vec::new();

    let mut depth = 0usize;
    let mut library_is_dict = false;
    let mut container_found = false;
    let mut in_container = false;
    let mut current: Option<RawTrack> = None;
    let mut pair = PairState::AwaitingKey;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                let is_dict = e.name().as_ref() == b"dict";

                match depth {
                    LIBRARY_DEPTH => library_is_dict = is_dict,
                    CONTAINER_DEPTH if is_dict && library_is_dict && !container_found => {
                        container_found = true;
                        in_container = true;
                    }
                    TRACK_DEPTH if in_container && is_dict => {
                        current = Some(RawTrack::new());
                        pair = PairState::AwaitingKey;
                    }
                    FIELD_DEPTH if current.is_some() => {
                        pair = if e.name().as_ref() == b"key" {
                            // A second key before any value overwrites the
                            // first, as in the source format
                            PairState::ReadingKey(None)
                        } else {
                            // A value with no preceding key carries None
                            // and is discarded on close
                            PairState::ReadingValue(pair.take_pending(), None)
                        };
                    }
                    _ => {}
                }
            }

            Ok(Event::Empty(e)) => {
                // Self-closing elements never change the depth
                let is_dict = e.name().as_ref() == b"dict";

                match depth + 1 {
                    CONTAINER_DEPTH if is_dict && library_is_dict && !container_found => {
                        // An empty container: the document is well-shaped
                        // but holds no tracks
                        container_found = true;
                    }
                    FIELD_DEPTH if current.is_some() => {
                        if e.name().as_ref() == b"key" {
                            pair = PairState::AwaitingValue(None);
                        } else {
                            // Childless value nodes such as <true/> still
                            // consume the pending key, capturing empty text
                            if let (Some(field), Some(raw)) =
                                (pair.take_pending(), current.as_mut())
                            {
                                raw.set(field, String::new());
                            }
                        }
                    }
                    _ => {}
                }
            }

            Ok(Event::Text(e)) => {
                if current.is_some() {
                    match &mut pair {
                        PairState::ReadingKey(name) if depth == FIELD_DEPTH => {
                            if name.is_none() {
                                *name = Some(e.unescape().unwrap_or_default().to_string());
                            }
                        }
                        PairState::ReadingValue(_, value) if depth == FIELD_DEPTH => {
                            if value.is_none() {
                                *value = Some(e.unescape().unwrap_or_default().to_string());
                            }
                        }
                        _ => {}
                    }
                }
            }

            Ok(Event::End(_)) => {
                match depth {
                    FIELD_DEPTH if current.is_some() => {
                        match std::mem::replace(&mut pair, PairState::AwaitingKey) {
                            PairState::ReadingKey(name) => {
                                pair = PairState::AwaitingValue(
                                    name.as_deref().and_then(FieldKey::from_name),
                                );
                            }
                            PairState::ReadingValue(field, value) => {
                                if let (Some(field), Some(raw)) = (field, current.as_mut()) {
                                    raw.set(field, value.unwrap_or_default());
                                }
                            }
                            state => pair = state,
                        }
                    }
                    TRACK_DEPTH => {
                        if let Some(raw) = current.take() {
                            if raw.has_required_fields() {
                                candidates.push(raw);
                            } else {
                                log::debug!("Skipping incomplete track entry: {:?}", raw);
                            }
                        }
                    }
                    CONTAINER_DEPTH => in_container = false,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }

            Ok(Event::Eof) => {
                if depth > 0 {
                    return Err(ExtractError::TruncatedDocument {
                        position: reader.buffer_position(),
                    });
                }
                break;
            }
            Err(e) => {
                return Err(ExtractError::MalformedDocument {
                    position: reader.buffer_position(),
                    source: e,
                });
            }
            _ => {}
        }

        buf.clear();
    }

    Ok(candidates)
}

/// Post-process the retained candidates: parse release dates and build the
/// final records. Entries whose date text does not parse are dropped.
fn normalize(candidates: Vec<RawTrack>) -> Vec<TrackRecord> {
    let total = candidates.len();
    let mut tracks = Vec::with_capacity(total);

    for raw in candidates {
        if let Some(track) = finish_track(raw) {
            tracks.push(track);
        }
    }

    let dropped = total - tracks.len();
    if dropped > 0 {
        log::info!("Dropped {dropped} track entries with unparsable release dates");
    }

    tracks
}

/// Convert one candidate into a record, applying the field defaults.
fn finish_track(raw: RawTrack) -> Option<TrackRecord> {
    let album = raw.album?;
    let date_text = raw.release_date?;

    let release_date = match dates::parse_release_date(&date_text) {
        Some(date) => date,
        None => {
            log::debug!("Dropping {album:?}: unparsable release date {date_text:?}");
            return None;
        }
    };

    Some(TrackRecord {
        album,
        artist: raw.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
        release_date,
        play_count: raw.play_count.unwrap_or(0),
    })
}
