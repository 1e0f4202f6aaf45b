pub mod csv_file;
pub mod csv_version;
pub mod error;
pub mod synthetic_version;

use std::fmt;
use std::path::PathBuf;

pub use error::LoadError;

use crate::models::OhlcvTimeSeries;

pub trait CreateTimeSeriesData {
    // Either create a time-series OR explain why not
    fn create_timeseries_data(&self) -> Result<OhlcvTimeSeries, LoadError>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Result of walking a provider list: the first series produced, plus every
/// failure met on the way there.
pub struct ProviderReport {
    pub series: OhlcvTimeSeries,
    pub signature: &'static str,
    pub failures: Vec<(&'static str, LoadError)>,
}

/// Tries each implementation in order and returns the first success.
/// `Err` carries every failure when none of them produced data.
pub fn get_timeseries_data(
    implementations: &[Box<dyn CreateTimeSeriesData>],
) -> Result<ProviderReport, Vec<(&'static str, LoadError)>> {
    let mut failures = Vec::new();
    for imp in implementations {
        match imp.create_timeseries_data() {
            Ok(series) => {
                return Ok(ProviderReport {
                    series,
                    signature: imp.signature(),
                    failures,
                });
            }
            Err(e) => {
                log::info!("Error with a time series implementation ({}): {}", imp.signature(), e);
                // Continue to the next implementation
                failures.push((imp.signature(), e));
            }
        }
    }
    Err(failures)
}

/// Where the session's series came from.
#[derive(Debug)]
pub enum LoadStatus {
    /// The configured file was read successfully.
    Loaded { path: PathBuf },
    /// The configured file could not be used; synthetic data replaced it.
    FellBack { reason: LoadError },
    /// No file was configured; synthetic data was generated directly.
    SyntheticOnly,
}

impl LoadStatus {
    pub fn is_synthetic(&self) -> bool {
        !matches!(self, LoadStatus::Loaded { .. })
    }

    pub fn fallback_reason(&self) -> Option<&LoadError> {
        match self {
            LoadStatus::FellBack { reason } => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Loaded { path } => write!(f, "Loaded {}", path.display()),
            LoadStatus::FellBack { reason } => write!(f, "Synthetic data (fallback: {})", reason),
            LoadStatus::SyntheticOnly => write!(f, "Synthetic data"),
        }
    }
}

/// A series together with the report of how it was obtained.
#[derive(Debug)]
pub struct LoadedSeries {
    pub series: OhlcvTimeSeries,
    pub status: LoadStatus,
}
