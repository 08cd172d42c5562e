//! Descriptive statistics over a sample of numbers.
//!
//! [`compute`] produces every figure the calculator reports in one pass over a
//! sorted copy of the input. Two conventions here are deliberate and must not be
//! swapped for textbook alternatives:
//!
//! - A sample where every value occurs once has **no mode**.
//! - Quartiles index into the sorted sample at `⌊n·0.25⌋` / `⌊n·0.75⌋`, averaging
//!   with the preceding element only when `n` is a multiple of four.

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::sample::{run_lengths, sorted_copy};

/// Multiplier applied to the IQR when building the outlier fence.
pub const FENCE_FACTOR: f64 = 1.5;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct StatisticsResults {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,

    /// Every value sharing the highest frequency, ascending. Empty when all values are unique.
    pub mode: Vec<f64>,

    pub min: f64,
    pub max: f64,
    pub range: f64,

    // population, divides by n
    pub variance: f64,
    pub standard_deviation: f64,

    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,

    /// Values outside the fence, ascending, duplicates kept.
    pub outliers: Vec<f64>,
}

impl StatisticsResults {
    /// Returns the `(lower, upper)` outlier fence: `q1 - 1.5·iqr` and `q3 + 1.5·iqr`.
    pub fn fences(&self) -> (f64, f64) {
        (
            self.q1 - FENCE_FACTOR * self.iqr,
            self.q3 + FENCE_FACTOR * self.iqr,
        )
    }

    pub fn has_mode(&self) -> bool {
        !self.mode.is_empty()
    }
}

/// Computes the full [`StatisticsResults`] record for `sample`.
///
/// The caller's slice is never reordered; all positional statistics come from a
/// private sorted copy, and the sum is accumulated in sorted order so that any
/// permutation of the same values yields bit-identical results.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] when `sample` has no elements.
pub fn compute(sample: &[f64]) -> Result<StatisticsResults> {
    if sample.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let sorted = sorted_copy(sample);
    let count = sorted.len();
    let n = count as f64;

    let sum: f64 = sorted.iter().sum();
    let mean = sum / n;

    let median = median_of_sorted(&sorted);
    let mode = mode_of_sorted(&sorted);

    let min = sorted[0];
    let max = sorted[count - 1];
    let range = max - min;

    let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let standard_deviation = variance.sqrt();

    let q1 = quartile_of_sorted(&sorted, count / 4);
    let q3 = quartile_of_sorted(&sorted, count * 3 / 4);
    let iqr = q3 - q1;

    let lower = q1 - FENCE_FACTOR * iqr;
    let upper = q3 + FENCE_FACTOR * iqr;
    let outliers: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|&x| x < lower || x > upper)
        .collect();

    debug!(
        count,
        mean,
        median,
        q1,
        q3,
        outliers = outliers.len(),
        "Computed statistics"
    );

    Ok(StatisticsResults {
        count,
        sum,
        mean,
        median,
        mode,
        min,
        max,
        range,
        variance,
        standard_deviation,
        q1,
        q3,
        iqr,
        outliers,
    })
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let m = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[m - 1] + sorted[m]) / 2.0
    } else {
        sorted[m]
    }
}

/// `index` is `⌊n·0.25⌋` or `⌊n·0.75⌋`. When `n % 4 == 0` the index is at least 1
/// for any non-empty sample, so `index - 1` cannot underflow.
fn quartile_of_sorted(sorted: &[f64], index: usize) -> f64 {
    if sorted.len() % 4 == 0 {
        (sorted[index - 1] + sorted[index]) / 2.0
    } else {
        sorted[index]
    }
}

fn mode_of_sorted(sorted: &[f64]) -> Vec<f64> {
    let runs = run_lengths(sorted);
    let max_frequency = runs.iter().map(|&(_, n)| n).max().unwrap_or(0);

    if max_frequency <= 1 {
        return Vec::new();
    }

    runs.into_iter()
        .filter(|&(_, n)| n == max_frequency)
        .map(|(value, _)| value)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e9_f64..1e9, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn quartiles_bracket_median(data in finite_vec(1, 80)) {
            let r = compute(&data).unwrap();
            prop_assert!(r.q1 <= r.median, "q1 {} > median {}", r.q1, r.median);
            prop_assert!(r.median <= r.q3, "median {} > q3 {}", r.median, r.q3);
        }

        #[test]
        fn count_and_extremes_match_input(data in finite_vec(1, 80)) {
            let r = compute(&data).unwrap();
            prop_assert_eq!(r.count, data.len());
            prop_assert!(data.iter().all(|&x| r.min <= x && x <= r.max));
            prop_assert!(r.variance >= 0.0);
        }

        #[test]
        fn outliers_lie_outside_fence(data in finite_vec(1, 80)) {
            let r = compute(&data).unwrap();
            let (lower, upper) = r.fences();
            for o in &r.outliers {
                prop_assert!(*o < lower || *o > upper);
                prop_assert!(data.contains(o));
            }
        }

        #[test]
        fn permutation_gives_identical_results(
            (data, shuffled) in finite_vec(1, 60)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            prop_assert_eq!(compute(&data).unwrap(), compute(&shuffled).unwrap());
        }

        #[test]
        fn repeated_compute_is_identical(data in finite_vec(1, 60)) {
            prop_assert_eq!(compute(&data).unwrap(), compute(&data).unwrap());
        }

        #[test]
        fn distinct_values_have_no_mode(n in 1_usize..50, start in -1000_i32..1000) {
            let data: Vec<f64> = (0..n as i32).map(|i| f64::from(start + i)).collect();
            prop_assert!(compute(&data).unwrap().mode.is_empty());
        }
    }
}
