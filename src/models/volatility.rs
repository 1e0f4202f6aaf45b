//! Derived per-record metrics.

/// Volatility index: `high[i] - low[i]` for every record, co-indexed with
/// the input. Inverted records (high < low) pass through as negative values.
pub fn volatility_index(high_prices: &[f64], low_prices: &[f64]) -> Vec<f64> {
    debug_assert_eq!(high_prices.len(), low_prices.len());
    high_prices
        .iter()
        .zip(low_prices)
        .map(|(high, low)| high - low)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::timeseries::synthetic_version::{SyntheticConfig, generate_synthetic_series};

    #[test]
    fn test_volatility_identity_on_synthetic_series() {
        let series = generate_synthetic_series(&SyntheticConfig::default_ending_at(0));
        let volatility = volatility_index(&series.high_prices, &series.low_prices);

        assert_eq!(volatility.len(), series.len());
        for (i, v) in volatility.iter().enumerate() {
            let expected = series.high_prices[i] - series.low_prices[i];
            assert!((v - expected).abs() < 1e-9, "row {i}");
        }
    }

    #[test]
    fn test_negative_values_pass_through() {
        let high = [10.0, 5.0, 7.5];
        let low = [8.0, 6.0, 7.5];
        assert_eq!(volatility_index(&high, &low), vec![2.0, -1.0, 0.0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(volatility_index(&[], &[]).is_empty());
    }
}
