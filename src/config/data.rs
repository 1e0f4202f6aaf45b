//! Series loader configuration: where real data lives and how the synthetic
//! fallback is shaped.

/// Parameters of the seeded random walk used when no real data is available.
pub struct SyntheticDefaults {
    /// Number of daily records to generate
    pub days: usize,
    pub seed: u64,
    pub base_price: f64,
    /// Daily returns are drawn from Normal(mean, std_dev)
    pub return_mean: f64,
    pub return_std_dev: f64,
    /// Open/High/Low are offset from Close by Uniform(min, max) fractions
    pub offset_pct_range: (f64, f64),
    pub volume_range: (f64, f64),
}

/// The Master Data Configuration
pub struct DataConfig {
    /// CSV file tried first when the CLI doesn't name one
    pub default_csv_path: &'static str,
    /// Display name given to series read from disk
    pub file_series_name: &'static str,
    /// Display name given to the generated series
    pub synthetic_series_name: &'static str,
    pub synthetic: SyntheticDefaults,
}

pub const DATA: DataConfig = DataConfig {
    default_csv_path: "data/btcusd_1-min_data.csv",
    file_series_name: "BTCUSD",
    synthetic_series_name: "BTCUSD (synthetic)",

    synthetic: SyntheticDefaults {
        days: 500,
        seed: 42,
        base_price: 45_000.0,
        return_mean: 0.02,
        return_std_dev: 0.05,
        offset_pct_range: (0.01, 0.03),
        volume_range: (1_000_000.0, 50_000_000.0),
    },
};
