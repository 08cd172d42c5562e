use statcalc::breakdown::explain_all;
use statcalc::chart::{frequency_table, histogram};
use statcalc::error::StatsError;
use statcalc::output::summary_text;
use statcalc::parser::{DEFAULT_DELIMITER, parse_numbers};
use statcalc::statistic::Statistic;
use statcalc::stats::compute;

#[test]
fn test_full_pipeline() {
    let sample = parse_numbers("2, 4, 4, 6, 8, 8, 8, 10", DEFAULT_DELIMITER).expect("valid input");
    let results = compute(&sample).expect("non-empty sample");

    assert_eq!(results.count, 8);
    assert_eq!(results.mode, vec![8.0]);

    let table = frequency_table(&sample);
    assert_eq!(table.iter().map(|p| p.frequency).sum::<usize>(), results.count);

    let bins = histogram(&sample);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), results.count);

    let breakdowns = explain_all(&sample, &results);
    let mean = breakdowns
        .iter()
        .find(|b| b.statistic == Statistic::Mean)
        .unwrap();
    assert_eq!(mean.lines[2], "Mean: 50 ÷ 8 = 6.25");

    assert!(summary_text(&results).contains("Mode: 8"));
}

#[test]
fn test_blank_input_reports_empty() {
    let sample = parse_numbers("  ,  ", DEFAULT_DELIMITER).unwrap();
    assert_eq!(compute(&sample), Err(StatsError::EmptyInput));
    assert!(frequency_table(&sample).is_empty());
    assert!(histogram(&sample).is_empty());
}

#[test]
fn test_invalid_input_reports_token() {
    let err = parse_numbers("1, 2, x3", DEFAULT_DELIMITER).unwrap_err();
    assert!(matches!(err, StatsError::InvalidNumber { ref token } if token == "x3"));
}

#[test]
fn test_outlier_scenario() {
    let sample = parse_numbers("1,2,3,4,100", DEFAULT_DELIMITER).unwrap();
    let results = compute(&sample).unwrap();
    assert_eq!(results.outliers, vec![100.0]);
    assert!(summary_text(&results).ends_with("Outliers: 100"));
}

#[test]
fn test_evenly_spaced_scenario() {
    let sample = parse_numbers("10, 8, 6, 4, 2", DEFAULT_DELIMITER).unwrap();
    let results = compute(&sample).unwrap();

    assert_eq!(results.mean, 6.0);
    assert_eq!(results.median, 6.0);
    assert!(results.mode.is_empty());
    assert_eq!(results.range, 8.0);
    assert_eq!(results.variance, 8.0);
    assert!((results.standard_deviation - 2.83).abs() < 0.005);
}
