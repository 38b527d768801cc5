use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_WEEK, MIN_DAY};
use crate::{CalendarError, CalendarMetadata, JulianDay};
use std::fmt;

/// Both supported calendars number their months from 1
const FIRST_MONTH: u8 = 1;

/// Read access to the fields of a validated date in any calendar.
pub trait CalendarDate: Copy + Eq + fmt::Debug {
    fn year(&self) -> i32;
    fn month(&self) -> u8;
    fn day(&self) -> u8;
}

/// A calendar that can be bridged to every other through the Julian day.
///
/// Implementations only supply validation and the two conversions; the week
/// and ordinal arithmetic is shared.
pub trait CalendarSystem {
    type Date: CalendarDate;

    /// Calendar name
    fn name(&self) -> &'static str;

    /// Static name tables for this calendar
    fn metadata(&self) -> &'static CalendarMetadata;

    /// Whether `year` is a leap year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for year zero or an unsupported year.
    fn leap_year(&self, year: i32) -> Result<bool, CalendarError>;

    /// Number of months in `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for year zero or an unsupported year.
    fn months_in_year(&self, year: i32) -> Result<u8, CalendarError>;

    /// Number of days in the given month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` or `CalendarError::InvalidMonth`.
    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError>;

    /// Validates and builds a date.
    ///
    /// # Errors
    /// Returns the `CalendarError` for the first invalid component.
    fn new_date(&self, year: i32, month: u8, day: u8) -> Result<Self::Date, CalendarError>;

    /// Julian day at the start of `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the date lies outside
    /// the interchange range.
    fn date_to_julian_day(&self, date: Self::Date) -> Result<JulianDay, CalendarError>;

    /// Date containing the Julian day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the day falls outside this
    /// calendar's supported years.
    fn from_julian_day(&self, jd: JulianDay) -> Result<Self::Date, CalendarError>;

    /// Julian day at the start of the given date.
    ///
    /// # Errors
    /// Returns the validation error for an invalid date.
    fn to_julian_day(&self, year: i32, month: u8, day: u8) -> Result<JulianDay, CalendarError> {
        self.date_to_julian_day(self.new_date(year, month, day)?)
    }

    /// Number of days in `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for year zero or an unsupported year.
    fn days_in_year(&self, year: i32) -> Result<u16, CalendarError> {
        Ok(if self.leap_year(year)? {
            DAYS_IN_LEAP_YEAR
        } else {
            DAYS_IN_COMMON_YEAR
        })
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday.
    ///
    /// # Errors
    /// Returns the validation error for an invalid date.
    fn day_of_week(&self, year: i32, month: u8, day: u8) -> Result<u8, CalendarError> {
        Ok(self.to_julian_day(year, month, day)?.day_of_week())
    }

    /// Whether the date falls Monday through Friday.
    ///
    /// # Errors
    /// Returns the validation error for an invalid date.
    fn is_week_day(&self, year: i32, month: u8, day: u8) -> Result<bool, CalendarError> {
        Ok((1..=5).contains(&self.day_of_week(year, month, day)?))
    }

    /// 1-based ordinal of the date within its year.
    ///
    /// # Errors
    /// Returns the validation error for an invalid date.
    fn day_of_year(&self, year: i32, month: u8, day: u8) -> Result<u16, CalendarError> {
        let jd = self.to_julian_day(year, month, day)?;
        let start = self.to_julian_day(year, FIRST_MONTH, MIN_DAY)?;
        let ordinal = jd.day_number() - start.day_number() + 1;
        u16::try_from(ordinal).map_err(|_| CalendarError::InvalidDate { year, month, day })
    }

    /// Week of the year, counted from the Sunday on or before the date.
    ///
    /// # Errors
    /// Returns the validation error for an invalid date.
    fn week_of_year(&self, year: i32, month: u8, day: u8) -> Result<u8, CalendarError> {
        let jd = self.to_julian_day(year, month, day)?;
        let sunday = self.from_julian_day(jd.checked_add_days(-i64::from(jd.day_of_week()))?)?;
        let ordinal = self.day_of_year(sunday.year(), sunday.month(), sunday.day())?;
        u8::try_from((ordinal - 1) / u16::from(DAYS_IN_WEEK) + 1)
            .map_err(|_| CalendarError::InvalidDate { year, month, day })
    }
}
