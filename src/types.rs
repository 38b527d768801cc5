use crate::CalendarError;
use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_REGULAR_MONTH, LEAP_YEAR_CYCLE, MAX_YEAR,
    MIN_YEAR, MONTHS_IN_YEAR, PAGUME, PAGUME_DAYS, PAGUME_DAYS_LEAP,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroI32;
use std::num::NonZeroU8;

/// A year value guaranteed to be non-zero and within `MIN_YEAR..=MAX_YEAR`.
/// Negative years count backwards from year 1 with no year zero in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(NonZeroI32);

impl Year {
    /// Creates a new Year, validating that it's non-zero and within range
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is 0 or out of range.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        let non_zero = NonZeroI32::new(value).ok_or(CalendarError::InvalidYear(value))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(CalendarError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get()
    }

    /// The following year, skipping year zero. `None` past `MAX_YEAR`.
    pub fn succ(self) -> Option<Self> {
        let next = if self.get() == -1 { 1 } else { self.get() + 1 };
        Self::new(next).ok()
    }

    /// The preceding year, skipping year zero. `None` before `MIN_YEAR`.
    pub fn pred(self) -> Option<Self> {
        let prev = if self.get() == 1 { -1 } else { self.get() - 1 };
        Self::new(prev).ok()
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An Ethiopian month guaranteed to be in the range `1..=MONTHS_IN_YEAR` (1..=13)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MONTHS_IN_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > 13.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidMonth {
            month: value,
            max:   MONTHS_IN_YEAR,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > MONTHS_IN_YEAR {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Meskerem
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Pagume
    pub const LAST: Self = Self(NonZeroU8::MIN.saturating_add(PAGUME - 1));

    /// Whether this is Pagume, the epagomenal 13th month
    #[inline]
    pub const fn is_pagume(self) -> bool {
        self.0.get() == PAGUME
    }

    /// The following month of the same year, `None` after Pagume.
    pub fn succ(self) -> Option<Self> {
        Self::new(self.get() + 1).ok()
    }

    /// The preceding month of the same year, `None` before Meskerem.
    pub fn pred(self) -> Option<Self> {
        Self::new(self.get() - 1).ok()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidDate {
            year:  year.get(),
            month: month.get(),
            day:   value,
        };
        let non_zero = NonZeroU8::new(value).ok_or(invalid)?;
        if value > month_length(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// The first day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so only reject zero and
        // anything longer than the longest month
        let invalid = CalendarError::InvalidDate {
            year:  0,
            month: 0,
            day:   value,
        };
        if value > DAYS_IN_REGULAR_MONTH {
            return Err(invalid);
        }
        NonZeroU8::new(value).map(Self).ok_or(invalid)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Shifts negative years up by one so the count is continuous across the
/// missing year zero (-1 becomes 0, -2 becomes -1, ...).
pub(crate) const fn astronomical_year(year: i32) -> i32 {
    if year < 0 { year + 1 } else { year }
}

/// Leap years are those whose (shifted) year leaves remainder 3 modulo 4.
/// The remainder keeps the sign of the dividend, so -1 also qualifies.
pub(crate) const fn is_leap(year: i32) -> bool {
    let y = astronomical_year(year);
    y % LEAP_YEAR_CYCLE == 3 || y % LEAP_YEAR_CYCLE == -1
}

pub(crate) const fn is_leap_year(year: Year) -> bool {
    is_leap(year.get())
}

pub(crate) const fn month_length(year: Year, month: Month) -> u8 {
    if !month.is_pagume() {
        DAYS_IN_REGULAR_MONTH
    } else if is_leap_year(year) {
        PAGUME_DAYS_LEAP
    } else {
        PAGUME_DAYS
    }
}

pub(crate) const fn year_length(year: Year) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}
