//! Names for the individual figures the calculator reports.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One reported statistic, used to select breakdowns and formula cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Statistic {
    Mean,
    Median,
    Mode,
    Range,
    Min,
    Max,
    Variance,
    StandardDeviation,
    Q1,
    Q2,
    Q3,
    Iqr,
    Outliers,
}

impl Statistic {
    /// Every statistic, in display order.
    pub const ALL: [Statistic; 13] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::Mode,
        Statistic::Range,
        Statistic::Min,
        Statistic::Max,
        Statistic::Variance,
        Statistic::StandardDeviation,
        Statistic::Q1,
        Statistic::Q2,
        Statistic::Q3,
        Statistic::Iqr,
        Statistic::Outliers,
    ];

    /// Stable machine name, e.g. `"standardDeviation"`.
    pub fn key(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Mode => "mode",
            Statistic::Range => "range",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Variance => "variance",
            Statistic::StandardDeviation => "standardDeviation",
            Statistic::Q1 => "q1",
            Statistic::Q2 => "q2",
            Statistic::Q3 => "q3",
            Statistic::Iqr => "iqr",
            Statistic::Outliers => "outliers",
        }
    }

    /// Human-readable label, e.g. `"Standard Deviation"`.
    pub fn label(self) -> &'static str {
        match self {
            Statistic::Mean => "Mean",
            Statistic::Median => "Median",
            Statistic::Mode => "Mode",
            Statistic::Range => "Range",
            Statistic::Min => "Minimum",
            Statistic::Max => "Maximum",
            Statistic::Variance => "Variance",
            Statistic::StandardDeviation => "Standard Deviation",
            Statistic::Q1 => "Q1",
            Statistic::Q2 => "Q2 (Median)",
            Statistic::Q3 => "Q3",
            Statistic::Iqr => "IQR",
            Statistic::Outliers => "Outliers",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Statistic {
    type Err = String;

    /// Accepts the machine key plus common spellings; case, `-`, `_` and spaces are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let statistic = match normalized.as_str() {
            "mean" | "average" => Statistic::Mean,
            "median" => Statistic::Median,
            "mode" => Statistic::Mode,
            "range" => Statistic::Range,
            "min" | "minimum" => Statistic::Min,
            "max" | "maximum" => Statistic::Max,
            "variance" | "var" => Statistic::Variance,
            "standarddeviation" | "stddev" | "sd" => Statistic::StandardDeviation,
            "q1" => Statistic::Q1,
            "q2" => Statistic::Q2,
            "q3" => Statistic::Q3,
            "iqr" => Statistic::Iqr,
            "outliers" | "outlier" => Statistic::Outliers,
            _ => return Err(format!("unknown statistic '{s}'")),
        };
        Ok(statistic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_round_trip() {
        for stat in Statistic::ALL {
            assert_eq!(stat.key().parse::<Statistic>(), Ok(stat));
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("std-dev".parse::<Statistic>(), Ok(Statistic::StandardDeviation));
        assert_eq!("Standard Deviation".parse::<Statistic>(), Ok(Statistic::StandardDeviation));
        assert_eq!("MAXIMUM".parse::<Statistic>(), Ok(Statistic::Max));
        assert_eq!("IQR".parse::<Statistic>(), Ok(Statistic::Iqr));
    }

    #[test]
    fn test_parse_unknown() {
        assert!("skewness".parse::<Statistic>().is_err());
    }
}
