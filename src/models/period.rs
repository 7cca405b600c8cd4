//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type identifying the calendar
//! month that scopes all payroll facts for a run.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// A calendar-month pay period, identified as `"YYYY-MM"`.
///
/// All payroll facts (attendance, leave, performance reviews, training)
/// are scoped to a pay period. Malformed period strings are rejected when
/// parsing, so the engine itself only ever operates on valid months.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period: PayPeriod = "2024-03".parse().unwrap();
/// assert_eq!(period.to_string(), "2024-03");
/// assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
/// assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PayPeriod {
    // Always the first day of the month.
    first: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period for the given year and month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(EngineError::InvalidPeriod {
                value: format!("{year:04}-{month:02}"),
            })
    }

    /// The calendar year of this period.
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// The calendar month of this period (1-12).
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// The first calendar day of the period.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The last calendar day of the period.
    pub fn last_day(&self) -> NaiveDate {
        self.first + Months::new(1) - Days::new(1)
    }

    /// Checks if a given date falls within this period.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period: PayPeriod = "2024-03".parse().unwrap();
    /// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    /// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
    /// assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Checks if a date range counts toward this period.
    ///
    /// A range counts if its start date falls within the period, its end
    /// date falls within the period, or the range spans the period's first
    /// and last calendar day. This is the membership rule for leave
    /// requests and training date ranges.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period: PayPeriod = "2024-03".parse().unwrap();
    /// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    ///
    /// // Ends inside the period.
    /// assert!(period.overlaps(date(2024, 2, 25), date(2024, 3, 2)));
    /// // Starts inside the period.
    /// assert!(period.overlaps(date(2024, 3, 28), date(2024, 4, 2)));
    /// // Spans the whole period.
    /// assert!(period.overlaps(date(2024, 2, 1), date(2024, 4, 30)));
    /// // Entirely outside.
    /// assert!(!period.overlaps(date(2024, 4, 1), date(2024, 4, 5)));
    /// ```
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.last_day() && end >= self.first_day()
    }
}

impl FromStr for PayPeriod {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidPeriod {
            value: s.to_string(),
        };

        let (year_str, month_str) = s.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;

        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl TryFrom<String> for PayPeriod {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PayPeriod> for String {
    fn from(period: PayPeriod) -> Self {
        period.to_string()
    }
}
