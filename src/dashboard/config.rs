//! Dashboard configuration

use std::path::PathBuf;

use chrono::NaiveDate;

/// Configuration for building the dashboard
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Path to the exported library XML (tilde already expanded)
    pub library_path: PathBuf,

    /// Date the "current year" ranking is relative to; normally today
    pub reference_date: NaiveDate,
}

impl DashboardConfig {
    /// Create a configuration for the given library file and reference date
    pub fn new(library_path: PathBuf, reference_date: NaiveDate) -> Self {
        Self {
            library_path,
            reference_date,
        }
    }
}
