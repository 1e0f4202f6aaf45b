#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod simulation;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{LoadOptions, LoadStatus, LoadedSeries, fetch_series};
pub use domain::{Candle, TimeRange};
pub use models::{OhlcvTimeSeries, TimeSeriesSlice};
pub use simulation::{Pattern, Preset, SimulationParams, simulate};
pub use ui::VolatilityApp;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// OHLCV CSV file to load (Timestamp in epoch seconds, Open, High, Low, Close, Volume)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Skip the data file and generate a synthetic random walk
    #[arg(long, default_value_t = false)]
    pub synthetic: bool,

    /// Number of daily records in the synthetic series
    #[arg(long)]
    pub days: Option<usize>,

    /// Seed for the synthetic series
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext, loaded: LoadedSeries) -> Box<dyn eframe::App> {
    let app = ui::VolatilityApp::new(cc, loaded);
    Box::new(app)
}
