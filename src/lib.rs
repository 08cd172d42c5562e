pub mod breakdown;
pub mod chart;
pub mod error;
pub mod format;
pub mod formulas;
pub mod output;
pub mod parser;
pub mod statistic;
pub mod stats;

mod sample;
