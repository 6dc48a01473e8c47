use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use itunes_dashboard::{report, DashboardConfig, DashboardPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itunes-dashboard")]
#[command(about = "Summarize an iTunes library XML export", long_about = None)]
struct Args {
    /// Path to the exported library XML
    #[arg(short = 'l', long, default_value = "Library.xml")]
    library: String,

    /// Reference date for the top-albums table (YYYY-MM-DD, defaults to today)
    #[arg(short = 'd', long)]
    date: Option<String>,

    /// Print the dashboard as JSON instead of text tables
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let reference_date = match &args.date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("Invalid reference date: {text} (expected YYYY-MM-DD)"))?,
        None => Local::now().date_naive(),
    };

    // Expand ~ in the library path
    let library_path = shellexpand::tilde(&args.library);

    let config = DashboardConfig::new(PathBuf::from(library_path.as_ref()), reference_date);
    let dashboard = DashboardPipeline::new(config).build();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        println!("{}", report::render_albums_by_year(&dashboard.albums_by_year));
        println!();
        println!(
            "{}",
            report::render_top_albums(dashboard.reference_year, &dashboard.top_albums)
        );
    }

    Ok(())
}
