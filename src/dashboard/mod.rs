//! Dashboard orchestration

pub mod config;
pub mod pipeline;

pub use config::DashboardConfig;
pub use pipeline::{Dashboard, DashboardPipeline};
