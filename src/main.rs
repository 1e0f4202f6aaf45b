#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;

use volatility_viz::config::APP_STATE_PATH;
use volatility_viz::{Cli, LoadOptions, fetch_series, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Data Loading (Blocking)
    let loaded = fetch_series(&LoadOptions::from_cli(&args));
    log::info!("{} ({} records)", loaded.status, loaded.series.len());

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Crypto Volatility Visualizer",
        options,
        Box::new(move |cc| Ok(run_app(cc, loaded))),
    )
}
