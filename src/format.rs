//! Fixed en-US display formatting for results.

/// Formats `value` with at most two fraction digits, trailing zeros dropped,
/// and comma thousands separators: `1234.5` becomes `"1,234.5"`, `6.0` becomes `"6"`.
///
/// Exact ties round half away from zero (`0.125` becomes `"0.13"`).
pub fn format_number(value: f64) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let fixed = fixed_two(value.abs());
    let unsigned = fixed.as_str();

    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Two-place fixed notation of a non-negative value.
///
/// `{:.2}` rounds exact ties to even. The only fractions that are exact ties at the
/// third decimal are odd eighths (.125, .375, .625, .875), so those are rounded up here.
fn fixed_two(abs: f64) -> String {
    let frac = abs.fract();
    if (frac * 8.0) % 2.0 == 1.0 {
        let cents = (frac * 100.0).ceil() as u32;
        return format!("{:.0}.{:02}", abs.trunc(), cents);
    }
    format!("{abs:.2}")
}

/// Formats each value and joins them with `", "`.
pub fn format_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| format_number(v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_rounds_to_two_places() {
        assert_eq!(format_number(2.8284271247461903), "2.83");
        assert_eq!(format_number(6.25), "6.25");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(3.999), "4");
    }

    #[test]
    fn test_format_ties_round_away_from_zero() {
        assert_eq!(format_number(0.125), "0.13");
        assert_eq!(format_number(0.375), "0.38");
        assert_eq!(format_number(-0.125), "-0.13");
        assert_eq!(format_number(1234.625), "1,234.63");
        assert_eq!(format_number(2.875), "2.88");
        // not an exact tie in binary, stays below
        assert_eq!(format_number(2.675), "2.67");
    }

    #[test]
    fn test_format_thousands_grouping() {
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(1_000_000.0), "1,000,000");
        assert_eq!(format_number(999.0), "999");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(-12345.678), "-12,345.68");
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[1.0, 2.25, 1000.0]), "1, 2.25, 1,000");
        assert_eq!(format_list(&[]), "");
    }
}
