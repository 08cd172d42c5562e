//! Output formatting and persistence for computed statistics.
//!
//! Supports pretty-printing, JSON serialization, a plain-text summary and CSV append.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::format::{format_list, format_number};
use crate::stats::StatisticsResults;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Flat, CSV-friendly view of a [`StatisticsResults`] record.
#[derive(Debug, Serialize)]
pub struct SummaryRecord {
    pub timestamp: DateTime<Utc>,
    pub label: Option<String>,
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: String,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub outliers: String,
}

impl SummaryRecord {
    pub fn from_results(results: &StatisticsResults) -> Self {
        SummaryRecord {
            timestamp: Utc::now(),
            label: None,
            count: results.count,
            sum: results.sum,
            mean: results.mean,
            median: results.median,
            mode: join_semicolon(&results.mode),
            min: results.min,
            max: results.max,
            range: results.range,
            variance: results.variance,
            standard_deviation: results.standard_deviation,
            q1: results.q1,
            q3: results.q3,
            iqr: results.iqr,
            outliers: join_semicolon(&results.outliers),
        }
    }

    /// Tags the record with a caller-chosen label (e.g. the dataset name).
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

fn join_semicolon(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Renders the plain-text summary used for copy/paste export.
pub fn summary_text(results: &StatisticsResults) -> String {
    let mode = if results.has_mode() {
        format_list(&results.mode)
    } else {
        "No mode (all values appear equally)".to_string()
    };
    let outliers = if results.outliers.is_empty() {
        "None detected".to_string()
    } else {
        format_list(&results.outliers)
    };

    [
        "Statistics Results:".to_string(),
        format!("Count: {}", results.count),
        format!("Sum: {}", format_number(results.sum)),
        format!("Mean: {}", format_number(results.mean)),
        format!("Median: {}", format_number(results.median)),
        format!("Mode: {mode}"),
        format!("Range: {}", format_number(results.range)),
        format!("Minimum: {}", format_number(results.min)),
        format!("Maximum: {}", format_number(results.max)),
        format!("Variance: {}", format_number(results.variance)),
        format!(
            "Standard Deviation: {}",
            format_number(results.standard_deviation)
        ),
        format!("Q1: {}", format_number(results.q1)),
        format!("Q3: {}", format_number(results.q3)),
        format!("IQR: {}", format_number(results.iqr)),
        format!("Outliers: {outliers}"),
    ]
    .join("\n")
}

/// Logs results using Rust's debug pretty-print format.
pub fn print_pretty(results: &StatisticsResults) {
    debug!("{:#?}", results);
}

/// Renders results as pretty-printed JSON, logging it at debug, and returns the text
/// for the caller to print.
pub fn print_json(results: &StatisticsResults) -> Result<String> {
    let json = serde_json::to_string_pretty(results)?;
    debug!("{}", json);
    Ok(json)
}

/// Appends a [`SummaryRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &SummaryRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open '{path}' for appending"))?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // header only on a fresh file
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    info!(path, count = record.count, "Summary record appended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_results() -> StatisticsResults {
        compute(&[2.0, 4.0, 4.0, 6.0, 8.0, 8.0, 8.0, 10.0]).unwrap()
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&StatisticsResults::default());
    }

    #[test]
    fn test_print_json_returns_rendered_record() {
        let json = print_json(&sample_results()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["count"], 8);
        assert_eq!(value["mode"], serde_json::json!([8.0]));
    }

    #[test]
    fn test_summary_text_lines() {
        let text = summary_text(&compute(&[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Statistics Results:");
        assert!(lines.contains(&"Mean: 6"));
        assert!(lines.contains(&"Mode: No mode (all values appear equally)"));
        assert!(lines.contains(&"Standard Deviation: 2.83"));
        assert!(lines.contains(&"Outliers: None detected"));
    }

    #[test]
    fn test_summary_text_lists_modes_and_outliers() {
        let text = summary_text(&compute(&[1.0, 1.0, 2.0, 3.0, 4.0, 100.0]).unwrap());
        assert!(text.contains("Mode: 1\n"));
        assert!(text.contains("Outliers: 100"));
    }

    #[test]
    fn test_record_joins_sequences() {
        let record = SummaryRecord::from_results(&compute(&[3.0, 3.0, 5.0, 5.0, 9.0]).unwrap())
            .with_label("weights");
        assert_eq!(record.mode, "3;5");
        assert_eq!(record.label.as_deref(), Some("weights"));
    }

    #[test]
    fn test_append_record_creates_file() {
        let path = temp_path("statcalc_test_create.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        let record = SummaryRecord::from_results(&sample_results());
        append_record(&path, &record).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_record_writes_header_once() {
        let path = temp_path("statcalc_test_header.csv");
        let _ = fs::remove_file(&path);

        let record = SummaryRecord::from_results(&sample_results());
        append_record(&path, &record).unwrap();
        append_record(&path, &record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        // 1 header + 2 data rows
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("timestamp")).count(),
            1
        );

        fs::remove_file(&path).unwrap();
    }
}
