//! Calendar months and inclusive month ranges.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use thiserror::Error;

use crate::error::SelectionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A calendar month. The month is always within 1..=12.
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseYearMonthError {
    #[error("expected YYYY-MM or YYYYMM, got `{0}`")]
    Format(String),
    #[error("month must be between 1 and 12, got {0}")]
    Month(u32),
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ParseYearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(ParseYearMonthError::Month(month));
        }

        Ok(YearMonth { year, month })
    }

    pub const fn january(year: i32) -> Self {
        YearMonth { year, month: 1 }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in the month, accounting for leap years.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if NaiveDate::from_ymd_opt(self.year, 2, 29).is_some() => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// The following month, rolling December into January of the next year.
    pub fn next(&self) -> YearMonth {
        if self.month == 12 {
            YearMonth {
                year: self.year + 1,
                month: 1,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// `YYYYMM`, as used in bucket directory names.
    pub fn compact(&self) -> String {
        format!("{}{:02}", self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let format_error = || ParseYearMonthError::Format(s.to_string());

        let (year, month) = match s.split_once('-') {
            Some((year, month)) => (year, month),
            None if s.len() == 6 && s.is_ascii() => s.split_at(4),
            None => return Err(format_error()),
        };

        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.is_empty() || month.len() > 2 || !digits(year) || !digits(month)
        {
            return Err(format_error());
        }

        let year = year.parse::<i32>().map_err(|_| format_error())?;
        let month = month.parse::<u32>().map_err(|_| format_error())?;

        YearMonth::new(year, month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inclusive range of months with `start <= end`.
pub struct TimeRange {
    start: YearMonth,
    end: YearMonth,
}

impl TimeRange {
    pub fn new(start: YearMonth, end: YearMonth) -> Result<Self, SelectionError> {
        if start > end {
            return Err(SelectionError::InvalidRange { start, end });
        }

        Ok(TimeRange { start, end })
    }

    /// A range covering a single month.
    pub fn single(month: YearMonth) -> Self {
        TimeRange {
            start: month,
            end: month,
        }
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> YearMonth {
        self.end
    }

    /// Months in the range, in calendar order.
    pub fn months(&self) -> Months {
        Months {
            next: Some(self.start),
            end: self.end,
        }
    }

    pub fn month_count(&self) -> usize {
        let span = (self.end.year - self.start.year) * 12 + self.end.month as i32
            - self.start.month as i32;
        span as usize + 1
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Iterator over the months of a [`TimeRange`].
pub struct Months {
    next: Option<YearMonth>,
    end: YearMonth,
}

impl Iterator for Months {
    type Item = YearMonth;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            Some(current.next())
        } else {
            None
        };

        Some(current)
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[rstest]
    #[case(2023, 1, 31)]
    #[case(2023, 2, 28)]
    #[case(2024, 2, 29)]
    #[case(1900, 2, 28)]
    #[case(2000, 2, 29)]
    #[case(2023, 4, 30)]
    #[case(2023, 9, 30)]
    #[case(2023, 12, 31)]
    fn should_count_days_in_month(#[case] year: i32, #[case] month: u32, #[case] days: u32) {
        assert_eq!(ym(year, month).days_in_month(), days);
    }

    #[test]
    fn should_reject_invalid_month() {
        assert_eq!(YearMonth::new(2023, 13), Err(ParseYearMonthError::Month(13)));
        assert_eq!(YearMonth::new(2023, 0), Err(ParseYearMonthError::Month(0)));
    }

    #[test]
    fn should_roll_december_into_next_year() {
        assert_eq!(ym(2023, 12).next(), ym(2024, 1));
        assert_eq!(ym(2023, 5).next(), ym(2023, 6));
    }

    #[rstest]
    #[case("2023-01", 2023, 1)]
    #[case("2023-1", 2023, 1)]
    #[case("202312", 2023, 12)]
    #[case(" 1940-07 ", 1940, 7)]
    fn should_parse_year_month(#[case] s: &str, #[case] year: i32, #[case] month: u32) {
        assert_eq!(s.parse::<YearMonth>().unwrap(), ym(year, month));
    }

    #[rstest]
    #[case("2023")]
    #[case("23-01")]
    #[case("2023-")]
    #[case("2023-abc")]
    #[case("jan 2023")]
    #[case("+202-01")]
    #[case("2023-+1")]
    #[case("-2023-01")]
    fn should_not_parse_malformed_year_month(#[case] s: &str) {
        assert!(matches!(
            s.parse::<YearMonth>(),
            Err(ParseYearMonthError::Format(_))
        ));
    }

    #[test]
    fn should_not_parse_month_13() {
        assert_eq!(
            "2023-13".parse::<YearMonth>(),
            Err(ParseYearMonthError::Month(13))
        );
    }

    #[test]
    fn should_format_year_month() {
        assert_eq!(ym(2023, 4).to_string(), "2023-04");
        assert_eq!(ym(2023, 4).compact(), "202304");
    }

    #[test]
    fn should_order_in_calendar_order() {
        assert!(ym(2022, 12) < ym(2023, 1));
        assert!(ym(2023, 2) < ym(2023, 10));
    }

    #[test]
    fn should_reject_reversed_range() {
        let err = TimeRange::new(ym(2023, 3), ym(2023, 2)).unwrap_err();

        assert_eq!(
            err,
            SelectionError::InvalidRange {
                start: ym(2023, 3),
                end: ym(2023, 2)
            }
        );
    }

    #[test]
    fn should_iterate_months_across_year_boundary() {
        let range = TimeRange::new(ym(2022, 11), ym(2023, 2)).unwrap();
        let months: Vec<YearMonth> = range.months().collect();

        assert_eq!(
            months,
            vec![ym(2022, 11), ym(2022, 12), ym(2023, 1), ym(2023, 2)]
        );
        assert_eq!(range.month_count(), 4);
    }

    #[test]
    fn should_iterate_single_month() {
        let range = TimeRange::single(ym(2023, 1));

        assert_eq!(range.months().count(), 1);
        assert_eq!(range.month_count(), 1);
    }

    #[test]
    fn should_count_months_of_whole_archive() {
        let range = TimeRange::new(ym(1940, 1), ym(2025, 12)).unwrap();

        assert_eq!(range.month_count(), 86 * 12);
        assert_eq!(range.months().count(), 86 * 12);
    }
}
