//! Numeric kernels shared across the engine.
//!
//! Every function treats the empty input as 0 rather than NaN, so callers
//! never have to special-case an empty filtered subset.

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divide by N, not N-1); 0.0 for an empty slice.
pub fn population_variance(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64
}

/// Population standard deviation; 0.0 for an empty slice.
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    population_variance(values, mean).sqrt()
}

/// Round to one decimal place, half away from zero. This is the resolution
/// every displayed average is reported at.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[70.0, 95.0]), 82.5);
    }

    #[test]
    fn std_dev_of_empty_is_zero() {
        assert_eq!(population_std_dev(&[], 0.0), 0.0);
        assert_eq!(population_variance(&[], 0.0), 0.0);
    }

    #[test]
    fn population_std_dev_divides_by_n() {
        // mean 83.4, population stddev ~15.0 when dividing by N.
        let scores = [60.0, 61.0, 62.0, 90.0, 91.0, 92.0, 93.0, 94.0, 95.0, 96.0];
        let m = mean(&scores);
        assert_eq!(m, 83.4);
        let sd = population_std_dev(&scores, m);
        assert!((sd - 15.0).abs() < 0.05, "stddev was {sd}");
    }

    #[test]
    fn round1_is_half_away_from_zero() {
        // 0.25 and -0.25 are exact in binary, so the halfway case is real.
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(82.44), 82.4);
        assert_eq!(round1(82.5), 82.5);
    }
}
