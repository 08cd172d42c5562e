//! Helpers over the caller's sample that both the engine and the chart shaper need.

/// Returns an ascending copy of `sample`, leaving the caller's slice untouched.
///
/// Uses a total order so the result is identical for any permutation of the input.
pub(crate) fn sorted_copy(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Collapses an ascending slice into `(value, occurrences)` runs.
///
/// Values are grouped with `==`, so `-0.0` and `0.0` share one run keyed by
/// whichever sorts first.
pub(crate) fn run_lengths(sorted: &[f64]) -> Vec<(f64, usize)> {
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &x in sorted {
        match runs.last_mut() {
            Some((value, n)) if *value == x => *n += 1,
            _ => runs.push((x, 1)),
        }
    }
    runs
}
