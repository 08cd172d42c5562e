//! Reference cards describing how each statistic is defined.

use serde::Serialize;

use crate::statistic::Statistic;

#[derive(Debug, Serialize)]
pub struct FormulaInfo {
    pub statistic: Statistic,
    pub title: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
    pub example: &'static str,
    pub calculation: &'static str,
    pub notes: &'static str,
}

impl FormulaInfo {
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{}\n\n{}\n\n{}\n\nSteps:\n",
            self.title, self.formula, self.description
        );
        for (i, step) in self.steps.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
        out.push_str(&format!(
            "\n{}\n{}\n\n{}\n",
            self.example, self.calculation, self.notes
        ));
        out
    }
}

static FORMULAS: [FormulaInfo; 13] = [
    FormulaInfo {
        statistic: Statistic::Mean,
        title: "Mean (Average)",
        formula: "μ = (x₁ + x₂ + ... + xₙ) / n",
        description: "The mean is the sum of all values divided by the number of values. It represents the central tendency of the data.",
        steps: &[
            "Add up all the values in your dataset",
            "Divide the sum by the number of values",
        ],
        example: "For the dataset [2, 4, 6, 8, 10]:",
        calculation: "(2 + 4 + 6 + 8 + 10) / 5 = 30 / 5 = 6",
        notes: "The mean is sensitive to outliers and extreme values, which can skew the result.",
    },
    FormulaInfo {
        statistic: Statistic::Median,
        title: "Median",
        formula: "For odd n: middle value\nFor even n: average of two middle values",
        description: "The median is the middle value when the data is arranged in order. It divides the dataset into two equal halves.",
        steps: &[
            "Sort all values in ascending order",
            "If there's an odd number of values, take the middle one",
            "If there's an even number of values, take the average of the two middle values",
        ],
        example: "For the dataset [2, 4, 6, 8, 10]:",
        calculation: "Sorted: [2, 4, 6, 8, 10]\nMiddle value: 6",
        notes: "The median is less sensitive to outliers than the mean, making it useful for skewed distributions.",
    },
    FormulaInfo {
        statistic: Statistic::Mode,
        title: "Mode",
        formula: "Value(s) that appear most frequently",
        description: "The mode is the value or values that appear most frequently in the dataset. A dataset can have one mode, multiple modes, or no mode.",
        steps: &[
            "Count the frequency of each value in the dataset",
            "Identify the value(s) with the highest frequency",
        ],
        example: "For the dataset [2, 4, 4, 6, 8, 8, 8, 10]:",
        calculation: "Frequencies: 2(1), 4(2), 6(1), 8(3), 10(1)\nMode: 8",
        notes: "If every value appears exactly once, there is no mode. If multiple values share the highest frequency, the dataset is multimodal.",
    },
    FormulaInfo {
        statistic: Statistic::Range,
        title: "Range",
        formula: "Range = Maximum value - Minimum value",
        description: "The range measures the spread of the data. It is the difference between the largest and smallest values.",
        steps: &[
            "Find the maximum value in the dataset",
            "Find the minimum value in the dataset",
            "Subtract the minimum from the maximum",
        ],
        example: "For the dataset [2, 4, 6, 8, 10]:",
        calculation: "Maximum: 10\nMinimum: 2\nRange: 10 - 2 = 8",
        notes: "The range is simple to calculate but is sensitive to outliers and says nothing about how values are spread between the extremes.",
    },
    FormulaInfo {
        statistic: Statistic::Min,
        title: "Minimum",
        formula: "min(x₁, x₂, ..., xₙ)",
        description: "The minimum is the smallest value in the dataset.",
        steps: &[
            "Compare all values in the dataset",
            "Identify the smallest value",
        ],
        example: "For the dataset [2, 4, 6, 8, 10]:",
        calculation: "Minimum: 2",
        notes: "The minimum is the lower bound of your data.",
    },
    FormulaInfo {
        statistic: Statistic::Max,
        title: "Maximum",
        formula: "max(x₁, x₂, ..., xₙ)",
        description: "The maximum is the largest value in the dataset.",
        steps: &[
            "Compare all values in the dataset",
            "Identify the largest value",
        ],
        example: "For the dataset [2, 4, 6, 8, 10]:",
        calculation: "Maximum: 10",
        notes: "The maximum is the upper bound of your data.",
    },
    FormulaInfo {
        statistic: Statistic::Variance,
        title: "Variance",
        formula: "σ² = Σ(xᵢ - μ)² / n",
        description: "Variance measures how far each value is from the mean. It is the average of the squared differences from the mean.",
        steps: &[
            "Calculate the mean (μ) of the dataset",
            "For each value, subtract the mean and square the result",
            "Sum all the squared differences",
            "Divide by the number of values",
        ],
        example: "For the dataset [2, 4, 6, 8, 10] with mean = 6:",
        calculation: "[(2-6)² + (4-6)² + (6-6)² + (8-6)² + (10-6)²] / 5\n= [16 + 4 + 0 + 4 + 16] / 5\n= 40 / 5 = 8",
        notes: "This is the population variance (divide by n). A larger variance means the data is more dispersed.",
    },
    FormulaInfo {
        statistic: Statistic::StandardDeviation,
        title: "Standard Deviation",
        formula: "σ = √(σ²) = √[Σ(xᵢ - μ)² / n]",
        description: "Standard deviation is the square root of the variance. It measures the typical distance between each data point and the mean.",
        steps: &[
            "Calculate the variance (σ²) of the dataset",
            "Take the square root of the variance",
        ],
        example: "For the dataset [2, 4, 6, 8, 10] with variance = 8:",
        calculation: "σ = √(8) = 2.83",
        notes: "Standard deviation is in the same units as the data. A smaller value means values cluster closer to the mean.",
    },
    FormulaInfo {
        statistic: Statistic::Q1,
        title: "First Quartile (Q1)",
        formula: "Q1 = value at position ⌊n × 0.25⌋ of the sorted data",
        description: "Q1 marks the 25th percentile. When n is a multiple of four, it is the average of the values at positions ⌊n × 0.25⌋ - 1 and ⌊n × 0.25⌋.",
        steps: &[
            "Sort the dataset in ascending order",
            "Compute the position ⌊n × 0.25⌋ (counting from 0)",
            "If n is a multiple of four, average that value with the one before it",
        ],
        example: "For the dataset [2, 4, 6, 8, 10]:",
        calculation: "Position: ⌊5 × 0.25⌋ = 1 → Q1 = 4",
        notes: "Q1 describes the lower spread of the data and is used in computing the IQR.",
    },
    FormulaInfo {
        statistic: Statistic::Q2,
        title: "Second Quartile (Q2 / Median)",
        formula: "Q2 = Median of the dataset",
        description: "Q2 is the 50th percentile of the dataset, which is the same as the median.",
        steps: &[
            "Sort the dataset in ascending order",
            "If odd number of items: Q2 = middle value",
            "If even: Q2 = average of the two middle values",
        ],
        example: "For [2, 4, 6, 8, 10]:",
        calculation: "Sorted: [2, 4, 6, 8, 10] → Q2 = 6",
        notes: "Q2 divides the dataset into two equal halves.",
    },
    FormulaInfo {
        statistic: Statistic::Q3,
        title: "Third Quartile (Q3)",
        formula: "Q3 = value at position ⌊n × 0.75⌋ of the sorted data",
        description: "Q3 marks the 75th percentile. When n is a multiple of four, it is the average of the values at positions ⌊n × 0.75⌋ - 1 and ⌊n × 0.75⌋.",
        steps: &[
            "Sort the dataset in ascending order",
            "Compute the position ⌊n × 0.75⌋ (counting from 0)",
            "If n is a multiple of four, average that value with the one before it",
        ],
        example: "For the dataset [2, 4, 6, 8, 10]:",
        calculation: "Position: ⌊5 × 0.75⌋ = 3 → Q3 = 8",
        notes: "Q3 describes the upper spread of the data and is used in computing the IQR.",
    },
    FormulaInfo {
        statistic: Statistic::Iqr,
        title: "Interquartile Range (IQR)",
        formula: "IQR = Q3 - Q1",
        description: "The IQR measures the range of the middle 50% of the data. It is the difference between the third and first quartiles.",
        steps: &[
            "Find Q1 (25th percentile)",
            "Find Q3 (75th percentile)",
            "Subtract Q1 from Q3",
        ],
        example: "If Q1 = 4 and Q3 = 8:",
        calculation: "IQR = 8 - 4 = 4",
        notes: "The IQR is a robust measure of spread that is not affected by outliers.",
    },
    FormulaInfo {
        statistic: Statistic::Outliers,
        title: "Outliers",
        formula: "Outliers < Q1 - 1.5×IQR or > Q3 + 1.5×IQR",
        description: "Outliers are data points that lie significantly outside the range of the rest of the data.",
        steps: &[
            "Calculate Q1 and Q3",
            "Compute IQR = Q3 - Q1",
            "Lower bound = Q1 - 1.5 × IQR",
            "Upper bound = Q3 + 1.5 × IQR",
            "Any values outside this range are considered outliers",
        ],
        example: "If Q1 = 4, Q3 = 8, IQR = 4:",
        calculation: "Lower bound = 4 - 1.5×4 = -2\nUpper bound = 8 + 1.5×4 = 14\nOutliers are values < -2 or > 14",
        notes: "Outliers can distort statistical measures and should be examined before being removed.",
    },
];

/// Returns the reference card for `statistic`.
pub fn reference(statistic: Statistic) -> &'static FormulaInfo {
    // cards are stored in declaration order of `Statistic`
    &FORMULAS[statistic as usize]
}

/// All reference cards, in [`Statistic::ALL`] order.
pub fn all() -> &'static [FormulaInfo] {
    &FORMULAS
}
