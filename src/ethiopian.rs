use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_CYCLE, DAYS_IN_LEAP_YEAR, DAYS_IN_REGULAR_MONTH,
    DAYS_IN_WEEK, ETHIOPIAN_EPOCH_DAY, ISO_DATE_FORMAT, LEAP_YEAR_CYCLE, MESKEREM, MIN_DAY,
    MONTHS_IN_YEAR,
};
use crate::types::{self, Day, Month, Year, astronomical_year};
use crate::{
    CalendarDate, CalendarError, CalendarMetadata, CalendarSystem, ETHIOPIAN_METADATA,
    GregorianDate, JulianDay, ParseError, Pattern,
};
use std::fmt;
use std::str::FromStr;

/// Day number (`floor` of the Julian day) of an Ethiopian date.
///
/// Plain arithmetic with no validation, so it can also place the day just past
/// the supported range.
#[allow(clippy::cast_lossless)] // `From` is not usable in const fn
pub(crate) const fn day_number(year: i32, month: u8, day: u8) -> i64 {
    let y = astronomical_year(year) as i64;
    day as i64
        + (month as i64 - 1) * DAYS_IN_REGULAR_MONTH as i64
        + (y - 1) * DAYS_IN_COMMON_YEAR as i64
        + y.div_euclid(LEAP_YEAR_CYCLE as i64)
        + ETHIOPIAN_EPOCH_DAY
        - 1
}

/// Inverse of [`day_number`].
fn date_from_day_number(n: i64) -> Result<EthiopianDate, CalendarError> {
    let out_of_range = || CalendarError::JulianDayOutOfRange(n);

    let c = n - ETHIOPIAN_EPOCH_DAY;
    // Discount the leap days of the completed 4-year cycles before dividing
    // into 365-day years.
    let leap_days = (c + i64::from(DAYS_IN_LEAP_YEAR)).div_euclid(DAYS_IN_LEAP_CYCLE);
    let shifted = (c - leap_days).div_euclid(i64::from(DAYS_IN_COMMON_YEAR)) + 1;
    let year = if shifted <= 0 { shifted - 1 } else { shifted };
    let year = i32::try_from(year).map_err(|_| out_of_range())?;

    let offset = n - day_number(year, MESKEREM, MIN_DAY);
    let month_index = offset.div_euclid(i64::from(DAYS_IN_REGULAR_MONTH));
    let day = offset - month_index * i64::from(DAYS_IN_REGULAR_MONTH) + 1;
    let month = u8::try_from(month_index + 1).map_err(|_| out_of_range())?;
    let day = u8::try_from(day).map_err(|_| out_of_range())?;

    EthiopianDate::new(year, month, day)
}

/// The Ethiopian calendar: twelve 30-day months followed by Pagume, which has
/// 5 days, or 6 in a leap year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ethiopian;

/// A validated date in the Ethiopian calendar.
///
/// The fields can only be combined through [`EthiopianDate::new`] (or a
/// conversion from a Julian day), so day 6 of Pagume never exists in a
/// common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthiopianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl EthiopianDate {
    /// Creates a new date, validating every component.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear`, `InvalidMonth` or `InvalidDate`
    /// for the first component that is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Self::from_parts(year, month, day)
    }

    /// Creates a date from an already validated year and month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if `day` does not exist in that month.
    pub fn from_parts(year: Year, month: Month, day: u8) -> Result<Self, CalendarError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// The first day of the given month
    pub const fn first_of_month(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::FIRST,
        }
    }

    /// The given day of the month, pulled back to the last day of the month
    /// when the month is shorter (and up to day 1 for zero).
    pub fn clamped(year: Year, month: Month, day: u8) -> Self {
        let day = day.clamp(MIN_DAY, types::month_length(year, month));
        Self::from_parts(year, month, day).unwrap_or_else(|_| Self::first_of_month(year, month))
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month (1 = Meskerem, 13 = Pagume)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        types::is_leap_year(self.year)
    }

    pub const fn days_in_month(&self) -> u8 {
        types::month_length(self.year, self.month)
    }

    pub const fn days_in_year(&self) -> u16 {
        types::year_length(self.year)
    }

    /// Julian day at the start of this date
    pub const fn julian_day(&self) -> JulianDay {
        JulianDay::from_day_number(day_number(self.year(), self.month(), self.day()))
    }

    /// The Ethiopian date containing the Julian day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` or `JulianDayOutOfRange` if the
    /// day lies outside the supported years. Values from [`JulianDay::new`]
    /// always convert.
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, CalendarError> {
        date_from_day_number(jd.day_number())
    }

    /// Day of the week, 0 = Sunday (Ehud) through 6 = Saturday (Kidame)
    pub fn day_of_week(&self) -> u8 {
        self.julian_day().day_of_week()
    }

    /// Whether the date falls Monday through Friday
    pub fn is_week_day(&self) -> bool {
        (1..=5).contains(&self.day_of_week())
    }

    /// 1-based ordinal of the date within its year
    pub fn day_of_year(&self) -> u16 {
        u16::from(self.month() - 1) * u16::from(DAYS_IN_REGULAR_MONTH) + u16::from(self.day())
    }

    /// Week of the year, counted from the Sunday on or before this date.
    /// That Sunday can belong to the previous year, in which case its week
    /// number in that year is returned.
    pub fn week_of_year(&self) -> u8 {
        let weekday = u16::from(self.day_of_week());
        let ordinal = self.day_of_year();
        let sunday = if ordinal > weekday {
            ordinal - weekday
        } else {
            let previous = if self.year() == 1 { -1 } else { self.year() - 1 };
            let previous_length = if types::is_leap(previous) {
                DAYS_IN_LEAP_YEAR
            } else {
                DAYS_IN_COMMON_YEAR
            };
            ordinal + previous_length - weekday
        };
        // at most 53
        u8::try_from((sunday - 1) / u16::from(DAYS_IN_WEEK) + 1).unwrap_or(u8::MAX)
    }

    /// Moves by whole days.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the result leaves the supported years.
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        Self::from_julian_day(self.julian_day().checked_add_days(days)?)
    }

    /// "EE" for years of the current era, "BEE" before it
    pub fn epoch_label(&self) -> &'static str {
        ETHIOPIAN_METADATA.epoch_label(self.year())
    }

    /// Full month name, e.g. "Pagume"
    pub fn month_name(&self) -> &'static str {
        ETHIOPIAN_METADATA.month_names[usize::from(self.month() - 1)]
    }

    /// Full weekday name, e.g. "Ehud"
    pub fn day_name(&self) -> &'static str {
        ETHIOPIAN_METADATA.day_names[usize::from(self.day_of_week())]
    }

    /// The same day in the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` when the Gregorian year falls
    /// outside the supported range.
    pub fn to_gregorian(&self) -> Result<GregorianDate, CalendarError> {
        GregorianDate::from_julian_day(self.julian_day())
    }

    /// The Ethiopian date for a Gregorian one, e.g. a caller's "today".
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` for Gregorian dates
    /// before the first supported Ethiopian year.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, CalendarError> {
        Self::from_julian_day(date.julian_day()?)
    }
}

impl CalendarDate for EthiopianDate {
    fn year(&self) -> i32 {
        self.year.get()
    }

    fn month(&self) -> u8 {
        self.month.get()
    }

    fn day(&self) -> u8 {
        self.day.get()
    }
}

impl fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year() < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year().unsigned_abs(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for EthiopianDate {
    type Err = ParseError;

    /// Parses the `Display` form, `yyyy-mm-dd` with an optional leading `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(ISO_DATE_FORMAT).parse(s)
    }
}

impl serde::Serialize for EthiopianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for EthiopianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl CalendarSystem for Ethiopian {
    type Date = EthiopianDate;

    fn name(&self) -> &'static str {
        ETHIOPIAN_METADATA.name
    }

    fn metadata(&self) -> &'static CalendarMetadata {
        &ETHIOPIAN_METADATA
    }

    fn leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        Ok(types::is_leap_year(Year::new(year)?))
    }

    fn months_in_year(&self, year: i32) -> Result<u8, CalendarError> {
        Year::new(year)?;
        Ok(MONTHS_IN_YEAR)
    }

    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        Ok(types::month_length(Year::new(year)?, Month::new(month)?))
    }

    fn new_date(&self, year: i32, month: u8, day: u8) -> Result<EthiopianDate, CalendarError> {
        EthiopianDate::new(year, month, day)
    }

    fn date_to_julian_day(&self, date: EthiopianDate) -> Result<JulianDay, CalendarError> {
        Ok(date.julian_day())
    }

    fn from_julian_day(&self, jd: JulianDay) -> Result<EthiopianDate, CalendarError> {
        EthiopianDate::from_julian_day(jd)
    }

    fn day_of_year(&self, year: i32, month: u8, day: u8) -> Result<u16, CalendarError> {
        Ok(EthiopianDate::new(year, month, day)?.day_of_year())
    }

    fn week_of_year(&self, year: i32, month: u8, day: u8) -> Result<u8, CalendarError> {
        Ok(EthiopianDate::new(year, month, day)?.week_of_year())
    }
}
