use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Normal;

use crate::config::DATA;
use crate::data::timeseries::{CreateTimeSeriesData, LoadError};
use crate::domain::Candle;
use crate::models::OhlcvTimeSeries;
use crate::utils::TimeUtils;
use crate::utils::time_utils::utc_now_as_timestamp_ms;

/// Inputs of the seeded random walk. Everything else about the walk's shape
/// comes from `DATA.synthetic`.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticConfig {
    pub days: usize,
    pub seed: u64,
    /// Timestamp of the final (most recent) record
    pub end_timestamp_ms: i64,
}

impl SyntheticConfig {
    pub fn default_ending_at(end_timestamp_ms: i64) -> Self {
        Self {
            days: DATA.synthetic.days,
            seed: DATA.synthetic.seed,
            end_timestamp_ms,
        }
    }
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self::default_ending_at(utc_now_as_timestamp_ms())
    }
}

/// Daily random walk: `close_i = base * prod(1 + r_k)` for `k <= i` with
/// `r ~ Normal(return_mean, return_std_dev)`. Open and Low sit below Close,
/// High above it, each by an independent uniform fraction.
/// The same config always yields the same series.
pub fn generate_synthetic_series(config: &SyntheticConfig) -> OhlcvTimeSeries {
    let settings = &DATA.synthetic;
    let days = config.days;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let standard_normal = Normal::standard();

    let returns: Vec<f64> = (0..days)
        .map(|_| settings.return_mean + settings.return_std_dev * standard_normal.sample(&mut rng))
        .collect();

    let closes: Vec<f64> = returns
        .iter()
        .scan(settings.base_price, |price, r| {
            *price *= 1.0 + r;
            Some(*price)
        })
        .collect();

    let (offset_min, offset_max) = settings.offset_pct_range;
    let offsets = |rng: &mut StdRng| -> Vec<f64> {
        (0..days).map(|_| rng.gen_range(offset_min..offset_max)).collect()
    };
    let open_offsets = offsets(&mut rng);
    let high_offsets = offsets(&mut rng);
    let low_offsets = offsets(&mut rng);

    let (volume_min, volume_max) = settings.volume_range;
    let volumes: Vec<f64> = (0..days)
        .map(|_| rng.gen_range(volume_min..volume_max))
        .collect();

    let candles = (0..days)
        .map(|i| {
            let close = closes[i];
            let days_before_end = (days - 1 - i) as i64;
            Candle::new(
                config.end_timestamp_ms - days_before_end * TimeUtils::MS_IN_D,
                close * (1.0 - open_offsets[i]),
                close * (1.0 + high_offsets[i]),
                close * (1.0 - low_offsets[i]),
                close,
                volumes[i],
            )
        })
        .collect();

    OhlcvTimeSeries::from_candles(DATA.synthetic_series_name, candles)
}

pub struct SyntheticVersion {
    pub config: SyntheticConfig,
}

impl CreateTimeSeriesData for SyntheticVersion {
    fn signature(&self) -> &'static str {
        "Synthetic Random Walk"
    }

    fn create_timeseries_data(&self) -> Result<OhlcvTimeSeries, LoadError> {
        Ok(generate_synthetic_series(&self.config))
    }
}
