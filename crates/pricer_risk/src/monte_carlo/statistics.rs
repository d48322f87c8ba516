//! Summary statistics of simulated portfolio values.

/// Percentile `q` (in percent) of an ascending-sorted sample.
///
/// Linear interpolation between the two nearest order statistics, at
/// position `q / 100 · (n - 1)`. Returns `None` for an empty sample.
///
/// # Examples
///
/// ```
/// use pricer_risk::monte_carlo::percentile;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile(&sorted, 50.0), Some(3.0));
/// assert!((percentile(&sorted, 5.0).unwrap() - 1.2).abs() < 1e-12);
/// assert_eq!(percentile(&[], 5.0), None);
/// ```
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    let rank = (q / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let (a, b) = (sorted[lo], sorted[hi]);
    let value = a + (b - a) * (rank - lo as f64);

    // keeps the result monotone in q across order statistics
    Some(value.max(a).min(b))
}

/// Distribution summary of one Monte Carlo run.
///
/// VaR figures are percentiles of the simulated portfolio **values**, not
/// of P&L relative to the current value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationSummary {
    /// Sample mean of trial values
    pub mean: f64,
    /// Population standard deviation of trial values
    pub std: f64,
    /// 5th percentile of trial values
    pub var_95: f64,
    /// 1st percentile of trial values
    pub var_99: f64,
    /// Number of trials
    pub n_sims: usize,
    /// Horizon in years
    pub horizon: f64,
    /// Base seed the trial streams were derived from
    pub seed: u64,
}

impl SimulationSummary {
    /// Summarises trial values. Returns `None` for an empty sample.
    pub fn from_values(values: &[f64], horizon: f64, seed: u64) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            mean,
            std: variance.sqrt(),
            var_95: percentile(&sorted, 5.0)?,
            var_99: percentile(&sorted, 1.0)?,
            n_sims: values.len(),
            horizon,
            seed,
        })
    }

    /// Standard error of the mean.
    #[inline]
    pub fn std_error(&self) -> f64 {
        self.std / (self.n_sims as f64).sqrt()
    }

    /// Half-width of the 95% confidence interval of the mean.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percentile_interpolation() {
        let sorted = [10.0, 20.0];
        assert_relative_eq!(percentile(&sorted, 1.0).unwrap(), 10.1, epsilon = 1e-12);
        assert_relative_eq!(percentile(&sorted, 5.0).unwrap(), 10.5, epsilon = 1e-12);
        assert_eq!(percentile(&sorted, 0.0), Some(10.0));
        assert_eq!(percentile(&sorted, 100.0), Some(20.0));
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.5], 1.0), Some(7.5));
        assert_eq!(percentile(&[7.5], 99.0), Some(7.5));
    }

    #[test]
    fn test_population_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = SimulationSummary::from_values(&values, 0.1, 0).unwrap();
        assert_relative_eq!(summary.mean, 5.0, epsilon = 1e-12);
        assert_relative_eq!(summary.std, 2.0, epsilon = 1e-12);
        assert_relative_eq!(summary.std_error(), 2.0 / 8f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.confidence_95(), 1.96 * 2.0 / 8f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_var_ordering_small_samples() {
        for values in [vec![3.0], vec![5.0, 1.0], vec![2.0, 9.0, -4.0]] {
            let summary = SimulationSummary::from_values(&values, 0.1, 1).unwrap();
            assert!(summary.var_99 <= summary.var_95, "{:?}", values);
            assert_eq!(summary.n_sims, values.len());
        }
    }

    #[test]
    fn test_var_from_unsorted_values() {
        let values: Vec<f64> = (0..101).rev().map(f64::from).collect();
        let summary = SimulationSummary::from_values(&values, 0.1, 1).unwrap();
        assert_eq!(summary.var_95, 5.0);
        assert_eq!(summary.var_99, 1.0);
        assert_eq!(summary.mean, 50.0);
    }

    #[test]
    fn test_empty_sample() {
        assert!(SimulationSummary::from_values(&[], 0.1, 1).is_none());
    }
}
