//! Aggregations over the track table
//!
//! Both functions are pure reductions over the extracted records: they
//! share no state, and either may run first. Empty input produces empty
//! output, never an error.

mod monthly;
mod yearly;

pub use monthly::{top_albums_current_year, MonthlyTopAlbum, TOP_ALBUMS_PER_MONTH};
pub use yearly::{count_albums_by_year, AlbumYearCount};
