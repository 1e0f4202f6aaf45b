use std::path::PathBuf;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::DATA;
use crate::data::timeseries::csv_file;
use crate::data::timeseries::{CreateTimeSeriesData, LoadError};
use crate::models::OhlcvTimeSeries;

/// Real market data read from a CSV export.
pub struct CsvVersion {
    pub path: PathBuf,
}

impl CsvVersion {
    /// The path must name an existing regular file.
    pub fn validate_path(&self) -> Result<(), LoadError> {
        let metadata = std::fs::metadata(&self.path).map_err(|_| LoadError::NotFound {
            path: self.path.clone(),
        })?;
        if !metadata.is_file() {
            return Err(LoadError::NotAFile {
                path: self.path.clone(),
            });
        }
        Ok(())
    }
}

impl CreateTimeSeriesData for CsvVersion {
    fn signature(&self) -> &'static str {
        "CSV File"
    }

    fn create_timeseries_data(&self) -> Result<OhlcvTimeSeries, LoadError> {
        self.validate_path()?;

        #[cfg(debug_assertions)]
        let start_time = DEBUG_FLAGS.print_serde.then(|| {
            log::info!("Reading market data from: {:?}...", self.path);
            std::time::Instant::now()
        });

        let series = csv_file::load_from_path(&self.path, DATA.file_series_name)?;

        #[cfg(debug_assertions)]
        if let Some(start) = start_time {
            log::info!(
                "✅ CSV loaded: {} records in {:.2}s",
                series.len(),
                start.elapsed().as_secs_f64()
            );
        }

        Ok(series)
    }
}
