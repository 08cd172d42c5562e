//! Parser for delimited lists of numbers typed by a user.

use tracing::debug;

use crate::error::{Result, StatsError};

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ',';

/// Splits `input` on `delimiter` and parses every non-blank token as a finite `f64`.
///
/// Blank input yields an empty `Vec`; reporting that there is nothing to compute
/// is left to [`crate::stats::compute`].
///
/// # Errors
///
/// Returns [`StatsError::InvalidNumber`] for the first token that is not a finite number.
pub fn parse_numbers(input: &str, delimiter: char) -> Result<Vec<f64>> {
    let numbers = input
        .split(delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect::<Result<Vec<f64>>>()?;

    debug!(count = numbers.len(), "Parsed numbers from input");
    Ok(numbers)
}

fn parse_token(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(StatsError::InvalidNumber {
            token: token.to_string(),
        }),
    }
}

/// Renders `values` back into the normalized `", "`-separated form.
pub fn join_numbers(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_list() {
        let result = parse_numbers("2, 4,6 ,8", DEFAULT_DELIMITER).unwrap();
        assert_eq!(result, vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_parse_skips_blank_tokens() {
        let result = parse_numbers("1,, 2 ,  ,3,", DEFAULT_DELIMITER).unwrap();
        assert_eq!(result, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_blank_input_is_empty() {
        assert!(parse_numbers("", DEFAULT_DELIMITER).unwrap().is_empty());
        assert!(parse_numbers("   ", DEFAULT_DELIMITER).unwrap().is_empty());
    }

    #[test]
    fn test_parse_negative_fractional_and_exponent() {
        let result = parse_numbers("-1.5, .25, 1e3", DEFAULT_DELIMITER).unwrap();
        assert_eq!(result, vec![-1.5, 0.25, 1000.0]);
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = parse_numbers("1, two, 3", DEFAULT_DELIMITER).unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidNumber {
                token: "two".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_numbers("1, NaN", DEFAULT_DELIMITER).is_err());
        assert!(parse_numbers("inf", DEFAULT_DELIMITER).is_err());
    }

    #[test]
    fn test_parse_custom_delimiter() {
        let result = parse_numbers("1; 2; 3", ';').unwrap();
        assert_eq!(result, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_join_numbers() {
        assert_eq!(join_numbers(&[1.0, 2.5, -3.0]), "1, 2.5, -3");
        assert_eq!(join_numbers(&[]), "");
    }
}
