use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use volatility_viz::config::DATA;
use volatility_viz::data::timeseries::csv_file;
use volatility_viz::data::timeseries::synthetic_version::{
    SyntheticConfig, generate_synthetic_series,
};

/// Writes a synthetic OHLCV series in the dashboard's CSV input format.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output file
    #[arg(long, default_value = DATA.default_csv_path)]
    output: PathBuf,

    #[arg(long, default_value_t = DATA.synthetic.days)]
    days: usize,

    #[arg(long, default_value_t = DATA.synthetic.seed)]
    seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    build_demo_csv(&args)
}

fn build_demo_csv(args: &Args) -> Result<()> {
    if args.days == 0 {
        bail!("--days must be at least 1");
    }

    let config = SyntheticConfig {
        days: args.days,
        seed: args.seed,
        ..SyntheticConfig::default()
    };
    let series = generate_synthetic_series(&config);

    csv_file::save_to_path(&series, &args.output)
        .with_context(|| format!("Failed to write demo CSV {:?}", args.output))?;

    println!(
        "✅ Demo CSV written to {:?} with {} records (seed {}).",
        args.output,
        series.len(),
        args.seed
    );
    Ok(())
}
