use crate::consts::{DAYS_IN_WEEK, MAX_YEAR, MESKEREM, MIN_DAY, MIN_YEAR, WEEKDAY_ALIGNMENT};
use crate::{CalendarError, ethiopian, prelude::*};
use serde::{Deserialize, Serialize};

/// Smallest day number accepted from outside the crate: 1 Meskerem `MIN_YEAR`
pub(crate) const MIN_DAY_NUMBER: i64 = ethiopian::day_number(MIN_YEAR, MESKEREM, MIN_DAY);
/// Largest day number accepted from outside the crate: last day of `MAX_YEAR`
pub(crate) const MAX_DAY_NUMBER: i64 = ethiopian::day_number(MAX_YEAR + 1, MESKEREM, MIN_DAY) - 1;

/// A Julian day: a continuous day count used to move dates between calendars.
///
/// Calendar dates map to the half-integer at the start of their day
/// (e.g. `2454355.5`), and a day covers `[n + 0.5, n + 1.5)`: the day number
/// is `floor(value - 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Into, Serialize, Deserialize)]
#[display(fmt = "{_0}")]
#[serde(try_from = "f64", into = "f64")]
pub struct JulianDay(f64);

impl JulianDay {
    /// Creates a Julian day, validating that it is finite and inside the
    /// supported year range.
    ///
    /// # Errors
    /// Returns `CalendarError::NonFiniteJulianDay` for NaN or infinities and
    /// `CalendarError::JulianDayOutOfRange` for days outside the supported years.
    pub fn new(value: f64) -> Result<Self, CalendarError> {
        if !value.is_finite() {
            return Err(CalendarError::NonFiniteJulianDay);
        }
        let day = start_of_day(value);
        #[allow(clippy::cast_precision_loss)]
        let in_range = (MIN_DAY_NUMBER as f64..=MAX_DAY_NUMBER as f64).contains(&day);
        if !in_range {
            #[allow(clippy::cast_possible_truncation)]
            let saturated = day as i64;
            return Err(CalendarError::JulianDayOutOfRange(saturated));
        }
        Ok(Self(value))
    }

    /// The Julian day at the start of the given day number.
    #[allow(clippy::cast_precision_loss)] // |n| stays far below 2^53
    pub(crate) const fn from_day_number(n: i64) -> Self {
        Self(n as f64 + 0.5)
    }

    /// Day number with range validation, for values computed from foreign
    /// calendars.
    pub(crate) fn checked_from_day_number(n: i64) -> Result<Self, CalendarError> {
        if (MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&n) {
            Ok(Self::from_day_number(n))
        } else {
            Err(CalendarError::JulianDayOutOfRange(n))
        }
    }

    /// Returns the raw value
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Integer day this Julian day falls in
    #[allow(clippy::cast_possible_truncation)] // validated or built from an i64
    pub fn day_number(self) -> i64 {
        start_of_day(self.0) as i64
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday
    pub fn day_of_week(self) -> u8 {
        weekday_of(self.day_number())
    }

    /// Moves by whole days.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the result leaves the supported range.
    pub fn checked_add_days(self, days: i64) -> Result<Self, CalendarError> {
        let n = self
            .day_number()
            .checked_add(days)
            .ok_or(CalendarError::JulianDayOutOfRange(self.day_number()))?;
        Self::checked_from_day_number(n)
    }
}

impl TryFrom<f64> for JulianDay {
    type Error = CalendarError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Day number, as a float, of the day containing `value`
fn start_of_day(value: f64) -> f64 {
    (value - 0.5).floor()
}

pub(crate) fn weekday_of(day_number: i64) -> u8 {
    let dow = (day_number + WEEKDAY_ALIGNMENT).rem_euclid(i64::from(DAYS_IN_WEEK));
    // rem_euclid by 7 always fits
    u8::try_from(dow).unwrap_or_default()
}
