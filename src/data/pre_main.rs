// Data loading that runs in main before egui starts up

use std::path::PathBuf;

use crate::Cli;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::DATA;
use crate::data::timeseries::csv_version::CsvVersion;
use crate::data::timeseries::synthetic_version::{
    SyntheticConfig, SyntheticVersion, generate_synthetic_series,
};
use crate::data::timeseries::{
    CreateTimeSeriesData, LoadStatus, LoadedSeries, get_timeseries_data,
};

/// Everything the loader needs, resolved up front so nothing downstream reads
/// CLI or global state.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    /// `None` skips the file and goes straight to synthetic data
    pub data_file: Option<PathBuf>,
    pub synthetic: SyntheticConfig,
}

impl LoadOptions {
    pub fn from_cli(args: &Cli) -> Self {
        let data_file = if args.synthetic {
            None
        } else {
            Some(
                args.data_file
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DATA.default_csv_path)),
            )
        };

        Self {
            data_file,
            synthetic: SyntheticConfig {
                days: args.days.unwrap_or(DATA.synthetic.days),
                seed: args.seed.unwrap_or(DATA.synthetic.seed),
                ..SyntheticConfig::default()
            },
        }
    }
}

/// Load-or-synthesize. Always yields a series; `status` records whether the
/// file was used and, if not, why.
pub fn fetch_series(options: &LoadOptions) -> LoadedSeries {
    let mut providers: Vec<Box<dyn CreateTimeSeriesData>> = Vec::new();
    if let Some(path) = &options.data_file {
        providers.push(Box::new(CsvVersion { path: path.clone() }));
    }
    providers.push(Box::new(SyntheticVersion {
        config: options.synthetic.clone(),
    }));

    let loaded = match get_timeseries_data(&providers) {
        Ok(report) => {
            let status = match (&options.data_file, report.failures.into_iter().next()) {
                (_, Some((_, reason))) => LoadStatus::FellBack { reason },
                (Some(path), None) => LoadStatus::Loaded { path: path.clone() },
                (None, None) => LoadStatus::SyntheticOnly,
            };

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_serde {
                log::info!(
                    "Successfully retrieved {} records using: {}.",
                    report.series.len(),
                    report.signature
                );
            }

            LoadedSeries {
                series: report.series,
                status,
            }
        }
        // Synthetic generation cannot fail, so this only guards against a
        // future provider list that forgets it.
        Err(failures) => LoadedSeries {
            series: generate_synthetic_series(&options.synthetic),
            status: match failures.into_iter().next() {
                Some((_, reason)) => LoadStatus::FellBack { reason },
                None => LoadStatus::SyntheticOnly,
            },
        },
    };

    if let Some(reason) = loaded.status.fallback_reason() {
        log::warn!("⚠️  Market data file unusable: {}", reason);
        log::warn!("⚠️  Falling back to synthetic data...");
    }

    loaded
}
