// Series storage and derived metrics
pub mod timeseries;
pub mod volatility;

pub use timeseries::{OhlcvTimeSeries, TimeSeriesSlice};
pub use volatility::volatility_index;
