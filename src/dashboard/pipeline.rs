//! Dashboard assembly

use chrono::Datelike;
use serde::Serialize;

use super::config::DashboardConfig;
use crate::itunes;
use crate::stats::{self, AlbumYearCount, MonthlyTopAlbum};

/// Both aggregate tables, plus the year the ranking refers to
#[derive(Debug, Serialize)]
pub struct Dashboard {
    /// Year the top-albums table covers (year of the reference date)
    pub reference_year: i32,

    /// Distinct album titles per release year, ascending by year
    pub albums_by_year: Vec<AlbumYearCount>,

    /// Ranked albums per month of the reference year
    pub top_albums: Vec<MonthlyTopAlbum>,
}

/// Runs the extraction and both aggregations over one library file
pub struct DashboardPipeline {
    config: DashboardConfig,
}

impl DashboardPipeline {
    /// Create a new pipeline
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Parse the library and build both tables.
    ///
    /// Source failures have already been degraded to an empty library by
    /// the extraction layer, so this always yields a dashboard; the
    /// tables are empty when the source was unreadable.
    pub fn build(&self) -> Dashboard {
        log::info!("Building dashboard from {:?}", self.config.library_path);

        let library = itunes::parse_library(&self.config.library_path);

        let albums_by_year = stats::count_albums_by_year(library.tracks());
        let top_albums =
            stats::top_albums_current_year(library.tracks(), self.config.reference_date);

        log::info!(
            "Dashboard ready: {} release years, {} ranked albums for {}",
            albums_by_year.len(),
            top_albums.len(),
            self.config.reference_date.year()
        );

        Dashboard {
            reference_year: self.config.reference_date.year(),
            albums_by_year,
            top_albums,
        }
    }
}
