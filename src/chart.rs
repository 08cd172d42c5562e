//! Chart series derived from a sample.
//!
//! Both shapers are total: an empty sample yields an empty series.

use serde::Serialize;

use crate::sample::{run_lengths, sorted_copy};

/// Upper bound on the number of histogram bins.
pub const MAX_BINS: usize = 10;

/// One distinct value and how many times it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyPoint {
    pub value: f64,
    pub frequency: usize,
}

/// One fixed-width bin of the `[min, max]` partition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub center: f64,
    pub count: usize,
}

/// Groups `sample` by exact value, ascending.
pub fn frequency_table(sample: &[f64]) -> Vec<FrequencyPoint> {
    run_lengths(&sorted_copy(sample))
        .into_iter()
        .map(|(value, frequency)| FrequencyPoint { value, frequency })
        .collect()
}

/// Unrounded bin count `min(10, max - min + 1)`, never below 1. Bin width divides by this.
fn bin_divisor(min: f64, max: f64) -> f64 {
    (max - min + 1.0).min(MAX_BINS as f64).max(1.0)
}

/// Number of bins for a sample spanning `[min, max]`: the divisor rounded up, so a
/// fractional span gets one extra bin that reaches past `max`.
pub fn bin_count(min: f64, max: f64) -> usize {
    bin_divisor(min, max).ceil() as usize
}

/// Buckets `sample` into at most [`MAX_BINS`] equal-width bins starting at the minimum.
///
/// Bins are half-open except the last, which is closed so the maximum always
/// lands somewhere. Membership is tested against the next bin's start edge, so
/// every value is counted exactly once.
pub fn histogram(sample: &[f64]) -> Vec<HistogramBin> {
    let sorted = sorted_copy(sample);
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Vec::new();
    };

    let bins = bin_count(min, max);
    let bin_size = (max - min) / bin_divisor(min, max);
    let starts: Vec<f64> = (0..bins).map(|i| min + i as f64 * bin_size).collect();

    let mut cursor = 0;
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let center = (start + (start + bin_size)) / 2.0;

            let before = cursor;
            if i == bins - 1 {
                cursor = sorted.len();
            } else {
                let next_start = starts[i + 1];
                while cursor < sorted.len() && sorted[cursor] < next_start {
                    cursor += 1;
                }
            }

            HistogramBin {
                center,
                count: cursor - before,
            }
        })
        .collect()
}
