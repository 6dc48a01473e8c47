//! iTunes Dashboard - listening statistics from an iTunes XML export
//!
//! This library extracts album metadata from an exported library XML and
//! reduces it to two dashboard tables: distinct album releases per year,
//! and the most-played albums per month of the current year.

pub mod dashboard;
pub mod itunes;
pub mod model;
pub mod report;
pub mod stats;

pub use dashboard::config::DashboardConfig;
pub use dashboard::pipeline::{Dashboard, DashboardPipeline};
