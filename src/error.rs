//! Error type shared by the parser and the statistics engine.

use thiserror::Error;

/// Everything that can go wrong between raw text input and a results record.
///
/// The display strings are meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("Please enter at least one number")]
    EmptyInput,

    #[error("Please enter only valid numbers separated by commas (got '{token}')")]
    InvalidNumber { token: String },
}

pub type Result<T> = core::result::Result<T, StatsError>;
