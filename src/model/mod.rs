//! Data model for the extracted library
//!
//! These types are independent of both the input format (the plist export)
//! and the output tables derived from them.

mod library;
mod month;
mod track;

pub use library::Library;
pub use month::Month;
pub use track::{TrackRecord, UNKNOWN_ARTIST};
