//! DateRange value object

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// An inclusive date range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a date range. The start date must not be after the end date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::validation(
                "Start date must be before or equal to end date",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days between start and end, exclusive of the end date
    pub fn duration_in_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether the date falls within the range, boundaries included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whether two ranges share at least one day
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.end < other.start) && !(other.end < self.start)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
