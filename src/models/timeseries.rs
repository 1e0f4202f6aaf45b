use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::candle::Candle;
use crate::domain::time_range::TimeRange;
use crate::models::volatility::volatility_index;

// ============================================================================
// OhlcvTimeSeries: Raw time series data, one column per field
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct OhlcvTimeSeries {
    pub name: String, // Display name e.g. "BTCUSD"

    // Milliseconds since Unix epoch (UTC), ascending
    pub timestamps_ms: Vec<i64>,

    // Prices
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,

    pub volumes: Vec<f64>,
}

impl OhlcvTimeSeries {
    /// Builds a series from records in any order. The result is sorted
    /// ascending by timestamp; records sharing a timestamp keep their input order.
    pub fn from_candles(name: impl Into<String>, candles: Vec<Candle>) -> Self {
        let sorted = candles
            .into_iter()
            .sorted_by_key(|candle| candle.timestamp_ms);

        let mut series = OhlcvTimeSeries {
            name: name.into(),
            ..Default::default()
        };
        for candle in sorted {
            series.push(candle);
        }
        series
    }

    fn push(&mut self, candle: Candle) {
        self.timestamps_ms.push(candle.timestamp_ms);
        self.open_prices.push(candle.open_price);
        self.high_prices.push(candle.high_price);
        self.low_prices.push(candle.low_price);
        self.close_prices.push(candle.close_price);
        self.volumes.push(candle.volume);
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.timestamps_ms[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
            self.volumes[idx],
        )
    }

    pub fn len(&self) -> usize {
        self.timestamps_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps_ms.is_empty()
    }

    pub fn first_timestamp_ms(&self) -> Option<i64> {
        self.timestamps_ms.first().copied()
    }

    /// Latest timestamp. The series is sorted so this is also the maximum.
    pub fn last_timestamp_ms(&self) -> Option<i64> {
        self.timestamps_ms.last().copied()
    }

    pub fn is_sorted_ascending(&self) -> bool {
        self.timestamps_ms.windows(2).all(|pair| pair[0] <= pair[1])
    }

    pub fn get_all_indices(&self) -> (usize, usize) {
        (0, self.len())
    }

    /// Index range `[start, len)` of the records with timestamp >= `since_ms`.
    pub fn get_indices_since(&self, since_ms: i64) -> (usize, usize) {
        let start = self.timestamps_ms.partition_point(|&ts| ts < since_ms);
        (start, self.len())
    }

    /// Indices of the records inside the trailing window, measured back from
    /// this series' own latest timestamp. A series shorter than the window
    /// yields every record.
    pub fn get_indices_for_range(&self, time_range: TimeRange) -> (usize, usize) {
        match (time_range.window_ms(), self.last_timestamp_ms()) {
            (Some(window_ms), Some(latest_ms)) => {
                self.get_indices_since(latest_ms.saturating_sub(window_ms))
            }
            _ => self.get_all_indices(),
        }
    }

    /// Borrowed view over the trailing window. Never mutates `self`.
    pub fn filter_by_range(&self, time_range: TimeRange) -> TimeSeriesSlice<'_> {
        TimeSeriesSlice::new(self, self.get_indices_for_range(time_range))
    }

    pub fn slice(&self, range: (usize, usize)) -> TimeSeriesSlice<'_> {
        TimeSeriesSlice::new(self, range)
    }
}

// ============================================================================
// TimeSeriesSlice: Contiguous windowed view into OhlcvTimeSeries
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct TimeSeriesSlice<'a> {
    pub series_data: &'a OhlcvTimeSeries,
    pub range: (usize, usize), // (start_idx, end_idx) where end_idx is exclusive
}

impl<'a> TimeSeriesSlice<'a> {
    pub fn new(series_data: &'a OhlcvTimeSeries, range: (usize, usize)) -> Self {
        let end = range.1.min(series_data.len());
        let start = range.0.min(end);
        Self {
            series_data,
            range: (start, end),
        }
    }

    pub fn len(&self) -> usize {
        self.range.1 - self.range.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn timestamps_ms(&self) -> &'a [i64] {
        &self.series_data.timestamps_ms[self.range.0..self.range.1]
    }

    pub fn open_prices(&self) -> &'a [f64] {
        &self.series_data.open_prices[self.range.0..self.range.1]
    }

    pub fn high_prices(&self) -> &'a [f64] {
        &self.series_data.high_prices[self.range.0..self.range.1]
    }

    pub fn low_prices(&self) -> &'a [f64] {
        &self.series_data.low_prices[self.range.0..self.range.1]
    }

    pub fn close_prices(&self) -> &'a [f64] {
        &self.series_data.close_prices[self.range.0..self.range.1]
    }

    pub fn volumes(&self) -> &'a [f64] {
        &self.series_data.volumes[self.range.0..self.range.1]
    }

    /// High - Low for every record in the slice, co-indexed with it.
    pub fn volatility_index(&self) -> Vec<f64> {
        volatility_index(self.high_prices(), self.low_prices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;

    const DAY: i64 = TimeUtils::MS_IN_D;

    fn daily_series(days: usize, end_ms: i64) -> OhlcvTimeSeries {
        let candles = (0..days)
            .map(|i| {
                let ts = end_ms - (days - 1 - i) as i64 * DAY;
                let p = 100.0 + i as f64;
                Candle::new(ts, p, p + 2.0, p - 1.0, p + 1.0, 10.0)
            })
            .collect();
        OhlcvTimeSeries::from_candles("TEST", candles)
    }

    #[test]
    fn test_from_candles_sorts_ascending() {
        let candles = vec![
            Candle::new(3 * DAY, 3.0, 3.0, 3.0, 3.0, 3.0),
            Candle::new(DAY, 1.0, 1.0, 1.0, 1.0, 1.0),
            Candle::new(2 * DAY, 2.0, 2.0, 2.0, 2.0, 2.0),
        ];
        let series = OhlcvTimeSeries::from_candles("TEST", candles);

        assert!(series.is_sorted_ascending());
        assert_eq!(series.timestamps_ms, vec![DAY, 2 * DAY, 3 * DAY]);
        // Columns travel with their timestamp
        assert_eq!(series.close_prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_candles_keeps_duplicates_in_input_order() {
        let candles = vec![
            Candle::new(DAY, 1.0, 1.0, 1.0, 1.0, 1.0),
            Candle::new(0, 0.0, 0.0, 0.0, 0.0, 0.0),
            Candle::new(DAY, 2.0, 2.0, 2.0, 2.0, 2.0),
        ];
        let series = OhlcvTimeSeries::from_candles("TEST", candles);

        assert_eq!(series.len(), 3);
        assert_eq!(series.timestamps_ms, vec![0, DAY, DAY]);
        assert_eq!(series.open_prices, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_filter_last_30_days_of_500() {
        let end_ms = 1_760_000_000_000;
        let series = daily_series(500, end_ms);
        let cutoff = end_ms - 30 * DAY;

        let filtered = series.filter_by_range(TimeRange::Last30Days);

        let expected: Vec<i64> = series
            .timestamps_ms
            .iter()
            .copied()
            .filter(|&ts| ts >= cutoff)
            .collect();
        assert_eq!(filtered.timestamps_ms(), expected.as_slice());
        assert_eq!(filtered.len(), 31);
        assert_eq!(filtered.timestamps_ms()[0], cutoff);
    }

    #[test]
    fn test_filter_full_dataset_returns_everything() {
        let series = daily_series(500, 1_760_000_000_000);
        let snapshot = series.clone();

        let filtered = series.filter_by_range(TimeRange::FullDataset);

        assert_eq!(filtered.len(), 500);
        assert_eq!(filtered.timestamps_ms(), snapshot.timestamps_ms.as_slice());
        assert_eq!(filtered.volumes(), snapshot.volumes.as_slice());
        assert_eq!(series, snapshot, "filtering must not mutate the input");
    }

    #[test]
    fn test_filter_short_series_returns_all_records() {
        let series = daily_series(5, 1_760_000_000_000);
        for range in [TimeRange::Last7Days, TimeRange::Last30Days, TimeRange::Last90Days] {
            assert_eq!(series.filter_by_range(range).len(), 5, "{range}");
        }
    }

    #[test]
    fn test_filter_empty_series() {
        let series = OhlcvTimeSeries::default();
        assert!(series.filter_by_range(TimeRange::Last7Days).is_empty());
        assert!(series.filter_by_range(TimeRange::FullDataset).is_empty());
    }

    #[test]
    fn test_filter_uses_series_max_not_wall_clock() {
        // Ends in 2001; still yields a full week of data
        let series = daily_series(20, 1_000_000_000_000);
        assert_eq!(series.filter_by_range(TimeRange::Last7Days).len(), 8);
    }

    #[test]
    fn test_filter_at_timestamp_extremes() {
        let series = OhlcvTimeSeries::from_candles(
            "TEST",
            vec![
                Candle::new(i64::MIN, 1.0, 1.0, 1.0, 1.0, 1.0),
                Candle::new(i64::MIN + DAY, 2.0, 2.0, 2.0, 2.0, 2.0),
            ],
        );
        assert_eq!(series.filter_by_range(TimeRange::Last7Days).len(), 2);
        assert_eq!(series.get_indices_for_range(TimeRange::Last90Days), (0, 2));
    }

    #[test]
    fn test_slice_volatility_is_co_indexed() {
        let series = daily_series(10, 1_760_000_000_000);
        let slice = series.filter_by_range(TimeRange::Last7Days);
        let volatility = slice.volatility_index();

        assert_eq!(volatility.len(), slice.len());
        for (i, v) in volatility.iter().enumerate() {
            assert!((v - (slice.high_prices()[i] - slice.low_prices()[i])).abs() < 1e-9);
        }
    }

    #[test]
    fn test_slice_clamps_out_of_bounds_range() {
        let series = daily_series(3, 1_760_000_000_000);
        let slice = series.slice((2, 10));
        assert_eq!(slice.range, (2, 3));
        assert_eq!(series.slice((5, 10)).len(), 0);
    }
}
