use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

/// `n` evenly spaced values over the closed interval `[start, end]`.
/// The final value is pinned to `end` so it is exact regardless of rounding.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// `None` for an empty slice (argminmax panics on empty input).
pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    Some((get_min(vec), get_max(vec)))
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Population standard deviation (divides by N, not N - 1). NaN for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    values.iter().population_std_dev()
}

// Normalizes a vector of (positive) f64 to 0.0 to 1.0. Guarantees largest value is 1.0
// Smallest output value will be 0.0 iff smallest input value = 0.0
// Name: `Max normalization`, `Max-Abs normalization`, or `L∞ normalization`
pub fn normalize_max(vec: &[f64]) -> Vec<f64> {
    let Some((_, max_value)) = get_min_max(vec) else {
        return Vec::new();
    };
    match max_value {
        val if val <= 0.0 => vec.to_vec(),
        val => vec.iter().map(|&x| x / val).collect(),
    }
}

/// Indices to keep when thinning `len` points down to at most `max_points`.
/// The last index is always kept so the most recent value stays visible.
pub fn stride_indices(len: usize, max_points: usize) -> Vec<usize> {
    if len <= max_points || max_points < 2 {
        return (0..len).collect();
    }
    let stride = len.div_ceil(max_points - 1);
    let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_closed_interval() {
        let t = linspace(0.0, 10.0, 300);
        assert_eq!(t.len(), 300);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[299], 10.0);
        let step = 10.0 / 299.0;
        for pair in t.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_mean_and_population_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((mean(&values) - 5.0).abs() < 1e-12);
        assert!((population_std_dev(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_max() {
        let normalized = normalize_max(&[1.0, 2.0, 4.0]);
        assert_eq!(normalized, vec![0.25, 0.5, 1.0]);
        assert!(normalize_max(&[]).is_empty());
    }

    #[test]
    fn test_stride_indices_keeps_last_point() {
        assert_eq!(stride_indices(5, 10), vec![0, 1, 2, 3, 4]);

        let indices = stride_indices(10_000, 100);
        assert!(indices.len() <= 100);
        assert_eq!(indices[0], 0);
        assert_eq!(*indices.last().unwrap(), 9_999);
    }
}
