//! Step-by-step worked examples for each statistic.
//!
//! Every breakdown is re-derived from the same sample and [`StatisticsResults`]
//! the engine produced, so the arithmetic shown always agrees with the reported value.

use serde::Serialize;

use crate::chart::frequency_table;
use crate::format::{format_list, format_number};
use crate::parser::join_numbers;
use crate::sample::sorted_copy;
use crate::statistic::Statistic;
use crate::stats::{FENCE_FACTOR, StatisticsResults};

/// A worked example: a one-line description of the formula plus the derivation lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub statistic: Statistic,
    pub formula: &'static str,
    pub lines: Vec<String>,
}

impl Breakdown {
    /// Renders the breakdown as indented plain text under the statistic's label.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n  {}\n", self.statistic.label(), self.formula);
        for line in &self.lines {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Builds the worked example for `statistic`.
///
/// `sample` must be the exact input `results` was computed from.
pub fn explain(statistic: Statistic, sample: &[f64], results: &StatisticsResults) -> Breakdown {
    let (formula, lines) = match statistic {
        Statistic::Mean => (
            "Sum of all values ÷ Number of values",
            vec![
                format!(
                    "Sum: {} = {}",
                    sample
                        .iter()
                        .map(f64::to_string)
                        .collect::<Vec<_>>()
                        .join(" + "),
                    results.sum
                ),
                format!("Count: {}", results.count),
                format!(
                    "Mean: {} ÷ {} = {}",
                    results.sum,
                    results.count,
                    format_number(results.mean)
                ),
            ],
        ),
        Statistic::Median => (
            "Middle value of sorted array (or average of two middle values if even length)",
            median_lines(sample, results),
        ),
        Statistic::Mode => ("Value(s) that appear most frequently", mode_lines(sample, results)),
        Statistic::Range => (
            "Maximum value - Minimum value",
            vec![
                format!("Maximum: {}", format_number(results.max)),
                format!("Minimum: {}", format_number(results.min)),
                format!(
                    "Range: {} - {} = {}",
                    format_number(results.max),
                    format_number(results.min),
                    format_number(results.range)
                ),
            ],
        ),
        Statistic::Min => (
            "The smallest value in the dataset",
            vec![
                format!("Values: {}", join_numbers(sample)),
                format!("Minimum: {}", format_number(results.min)),
            ],
        ),
        Statistic::Max => (
            "The largest value in the dataset",
            vec![
                format!("Values: {}", join_numbers(sample)),
                format!("Maximum: {}", format_number(results.max)),
            ],
        ),
        Statistic::Variance => (
            "Average of squared differences from the mean",
            variance_lines(sample, results),
        ),
        Statistic::StandardDeviation => (
            "Square root of the variance",
            vec![
                format!("Variance: {}", format_number(results.variance)),
                format!(
                    "Standard Deviation: √{} = {}",
                    format_number(results.variance),
                    format_number(results.standard_deviation)
                ),
            ],
        ),
        Statistic::Q1 => (
            "First quartile (25th percentile) - the value at position ⌊n × 0.25⌋ of the sorted data",
            quartile_lines(sample, "Q1", 25, results.count / 4, results.q1),
        ),
        Statistic::Q2 => (
            "Median (Q2 / 50th percentile) - the middle value when data is sorted",
            vec![
                format!("Sorted values: {}", join_numbers(&sorted_copy(sample))),
                format!("Median position: {}", results.count.div_ceil(2)),
                format!("Q2 (Median): {}", format_number(results.median)),
            ],
        ),
        Statistic::Q3 => (
            "Third quartile (75th percentile) - the value at position ⌊n × 0.75⌋ of the sorted data",
            quartile_lines(sample, "Q3", 75, results.count * 3 / 4, results.q3),
        ),
        Statistic::Iqr => (
            "Q3 - Q1 (Interquartile Range - measures the spread of the middle 50% of values)",
            vec![
                format!("Q1: {}", format_number(results.q1)),
                format!("Q3: {}", format_number(results.q3)),
                format!(
                    "IQR: {} - {} = {}",
                    format_number(results.q3),
                    format_number(results.q1),
                    format_number(results.iqr)
                ),
            ],
        ),
        Statistic::Outliers => (
            "Values below Q1 - 1.5*IQR or above Q3 + 1.5*IQR",
            outlier_lines(results),
        ),
    };

    Breakdown {
        statistic,
        formula,
        lines,
    }
}

/// Builds the worked example for every statistic, in [`Statistic::ALL`] order.
pub fn explain_all(sample: &[f64], results: &StatisticsResults) -> Vec<Breakdown> {
    Statistic::ALL
        .iter()
        .map(|&stat| explain(stat, sample, results))
        .collect()
}

fn median_lines(sample: &[f64], results: &StatisticsResults) -> Vec<String> {
    let sorted = sorted_copy(sample);
    let mut lines = vec![format!("Sorted values: {}", join_numbers(&sorted))];

    let m = sorted.len() / 2;
    if sorted.len() % 2 == 0 && m > 0 {
        lines.push(format!(
            "Even number of values, taking average of middle two: ({} + {}) ÷ 2",
            sorted[m - 1],
            sorted[m]
        ));
        lines.push(format!("Median: {}", format_number(results.median)));
    } else {
        lines.push(format!(
            "Odd number of values, middle value is: {}",
            format_number(results.median)
        ));
    }
    lines
}

/// `index` is the 0-based position `⌊n·percent/100⌋`; when `n` is a multiple of four the
/// engine averages it with the preceding value.
fn quartile_lines(
    sample: &[f64],
    name: &str,
    percent: u32,
    index: usize,
    value: f64,
) -> Vec<String> {
    let sorted = sorted_copy(sample);
    let mut lines = vec![
        format!("Sorted values: {}", join_numbers(&sorted)),
        format!("Position: {}% of {} = {}", percent, sorted.len(), index),
    ];

    if sorted.len() % 4 == 0 && index > 0 {
        lines.push(format!(
            "Average of positions {} and {}: ({} + {}) ÷ 2 = {}",
            index - 1,
            index,
            sorted[index - 1],
            sorted[index],
            format_number(value)
        ));
    } else if let Some(at) = sorted.get(index) {
        lines.push(format!("Value at position {index}: {at}"));
    }

    lines.push(format!("{name} value: {}", format_number(value)));
    lines
}

fn mode_lines(sample: &[f64], results: &StatisticsResults) -> Vec<String> {
    let mut lines = vec!["Frequency count:".to_string()];
    lines.extend(frequency_table(sample).into_iter().map(|point| {
        let plural = if point.frequency == 1 { "" } else { "s" };
        format!("- {}: {} time{}", point.value, point.frequency, plural)
    }));

    if results.has_mode() {
        lines.push(format!("Most frequent: {}", join_numbers(&results.mode)));
    } else {
        lines.push("All values appear equally (no mode)".to_string());
    }
    lines
}

fn variance_lines(sample: &[f64], results: &StatisticsResults) -> Vec<String> {
    let mean = format_number(results.mean);
    let sorted = sorted_copy(sample);

    let mut lines = vec![
        format!("Mean: {mean}"),
        "Squared differences from mean:".to_string(),
    ];
    // displayed in input order; the total is taken in sorted order to match the engine
    lines.extend(sample.iter().map(|x| {
        format!(
            "- ({} - {})² = {}",
            x,
            mean,
            format_number((x - results.mean).powi(2))
        )
    }));

    let squared_sum: f64 = sorted.iter().map(|x| (x - results.mean).powi(2)).sum();
    lines.push(format!(
        "Sum of squared differences: {}",
        format_number(squared_sum)
    ));
    lines.push(format!(
        "Variance: {} ÷ {} = {}",
        format_number(squared_sum),
        results.count,
        format_number(results.variance)
    ));
    lines
}

fn outlier_lines(results: &StatisticsResults) -> Vec<String> {
    let (lower, upper) = results.fences();
    let found = if results.outliers.is_empty() {
        "None detected".to_string()
    } else {
        format_list(&results.outliers)
    };

    vec![
        format!("Q1: {}", format_number(results.q1)),
        format!("Q3: {}", format_number(results.q3)),
        format!("IQR: {}", format_number(results.iqr)),
        format!(
            "Lower bound: {} - {}*{} = {}",
            format_number(results.q1),
            FENCE_FACTOR,
            format_number(results.iqr),
            format_number(lower)
        ),
        format!(
            "Upper bound: {} + {}*{} = {}",
            format_number(results.q3),
            FENCE_FACTOR,
            format_number(results.iqr),
            format_number(upper)
        ),
        format!("Outliers: {found}"),
    ]
}
