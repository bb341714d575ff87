//! Errors reported back to the user when a selection cannot produce links.

use thiserror::Error;

use crate::{catalog::YEARS, period::YearMonth};

#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("Please select at least one variable")]
    NoVariables,
    #[error("Start time {start} cannot be later than end time {end}")]
    InvalidRange { start: YearMonth, end: YearMonth },
    #[error("Please select at least one month within the time range")]
    NoMonths,
    #[error("Unknown dataset `{0}`")]
    UnknownDataset(String),
    #[error("Dataset `{dataset}` has no variable `{variable}`")]
    UnknownVariable { dataset: String, variable: String },
    #[error("Year {0} is outside the archive ({}-{})", YEARS.start(), YEARS.end())]
    YearOutOfRange(i32),
}
