//! Date type for fund valuation calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A calendar date for fund valuation calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// the date operations valuation schedules need and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use fundlens_core::types::Date;
///
/// let date = Date::from_ymd(2024, 5, 31).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.add_days(7).day(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive when `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the first occurrence of `weekday` in the given year.
    ///
    /// Fund valuation schedules are anchored on a fixed weekday; the
    /// schedule for a year starts at that weekday's first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the year is out of range.
    pub fn first_weekday_of_year(year: i32, weekday: Weekday) -> CoreResult<Self> {
        let jan_first = Self::from_ymd(year, 1, 1)?;
        let offset = i64::from(weekday.num_days_from_monday())
            - i64::from(jan_first.weekday().num_days_from_monday());
        Ok(jan_first.add_days(offset.rem_euclid(7)))
    }

    /// Returns the ascending 7-day-stride schedule starting at this date.
    ///
    /// Includes this date and every seventh day after it, for dates
    /// strictly before `terminal`.
    #[must_use]
    pub fn weekly_through(&self, terminal: Date) -> Vec<Date> {
        let mut dates = Vec::new();
        let mut current = *self;
        while current < terminal {
            dates.push(current);
            current = current.add_days(7);
        }
        dates
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}
