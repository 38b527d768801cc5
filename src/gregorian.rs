use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_GREGORIAN_ERA, DAYS_TO_UNIX_EPOCH, DECEMBER, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, JANUARY, LEAP_YEAR_CYCLE,
    MIN_DAY, UNIX_EPOCH_DAY_NUMBER,
};
use crate::types::{Year, astronomical_year};
use crate::{
    CalendarDate, CalendarError, CalendarMetadata, CalendarSystem, GREGORIAN_METADATA, JulianDay,
    ParseError,
};
use std::fmt;
use std::str::FromStr;

/// The proleptic Gregorian calendar, used to bridge a caller's civil clock
/// into Ethiopian dates. Like the Ethiopian calendar it has no year zero:
/// 1 BCE is year -1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gregorian;

/// A validated proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year:  Year,
    month: u8,
    day:   u8,
}

/// Day number of a Gregorian date, counting from 0000-03-01 in 400-year eras.
#[allow(clippy::cast_lossless)] // `From` is not usable in const fn
pub(crate) const fn day_number(year: i32, month: u8, day: u8) -> i64 {
    let mut y = astronomical_year(year) as i64;
    if month <= FEBRUARY {
        y -= 1;
    }
    let era = y.div_euclid(GREGORIAN_CYCLE as i64);
    let year_of_era = y - era * GREGORIAN_CYCLE as i64;
    // months counted from March so the leap day is last
    let shifted_month = if month > FEBRUARY { month - 3 } else { month + 9 } as i64;
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_GREGORIAN_ERA + day_of_era - DAYS_TO_UNIX_EPOCH + UNIX_EPOCH_DAY_NUMBER
}

fn date_from_day_number(n: i64) -> Result<GregorianDate, CalendarError> {
    let out_of_range = || CalendarError::JulianDayOutOfRange(n);

    let z = n - UNIX_EPOCH_DAY_NUMBER + DAYS_TO_UNIX_EPOCH;
    let era = z.div_euclid(DAYS_IN_GREGORIAN_ERA);
    let day_of_era = z - era * DAYS_IN_GREGORIAN_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let mut y = year_of_era + era * i64::from(GREGORIAN_CYCLE);
    if month <= i64::from(FEBRUARY) {
        y += 1;
    }
    let year = if y <= 0 { y - 1 } else { y };

    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    let month = u8::try_from(month).map_err(|_| out_of_range())?;
    let day = u8::try_from(day).map_err(|_| out_of_range())?;
    GregorianDate::new(year, month, day)
}

// Helper functions

pub(crate) const fn is_leap_year(year: i32) -> bool {
    let year = astronomical_year(year);
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

fn validate_month(month: u8) -> Result<u8, CalendarError> {
    if (JANUARY..=DECEMBER).contains(&month) {
        Ok(month)
    } else {
        Err(CalendarError::InvalidMonth {
            month,
            max: DECEMBER,
        })
    }
}

impl GregorianDate {
    /// Creates a new date, validating every component.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear`, `InvalidMonth` or `InvalidDate`
    /// for the first component that is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year = Year::new(year)?;
        let month = validate_month(month)?;
        if day < MIN_DAY || day > days_in_month(year.get(), month) {
            return Err(CalendarError::InvalidDate {
                year: year.get(),
                month,
                day,
            });
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Julian day at the start of this date.
    ///
    /// # Errors
    /// Returns `CalendarError::JulianDayOutOfRange` if the date precedes the
    /// first supported Ethiopian year or follows the last.
    pub fn julian_day(&self) -> Result<JulianDay, CalendarError> {
        JulianDay::checked_from_day_number(day_number(self.year(), self.month, self.day))
    }

    /// The Gregorian date containing the Julian day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the Gregorian year falls outside
    /// the supported range.
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, CalendarError> {
        date_from_day_number(jd.day_number())
    }

    /// Helper to parse numbers with better error messages
    fn parse_number<T: FromStr>(s: &str, token: &'static str) -> Result<T, ParseError> {
        s.parse::<T>().map_err(|_| ParseError::NumberOutOfRange {
            token,
            value: s.to_owned(),
        })
    }
}

impl CalendarDate for GregorianDate {
    fn year(&self) -> i32 {
        self.year.get()
    }

    fn month(&self) -> u8 {
        self.month
    }

    fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year() < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year().unsigned_abs(),
            self.month,
            self.day
        )
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses ISO `YYYY-MM-DD`, with a leading `-` for years before the era
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split('-').map(str::trim).collect();
        let (year, month, day) = match parts.as_slice() {
            [year, month, day] => (*year, *month, *day),
            [_] => return Err(ParseError::MissingField("month")),
            [_, _] => return Err(ParseError::MissingField("day")),
            [_, _, _, rest @ ..] => return Err(ParseError::TrailingText(rest.join("-"))),
            [] => return Err(ParseError::EmptyInput),
        };

        let year: i32 = Self::parse_number(year, "yyyy")?;
        let month: u8 = Self::parse_number(month, "mm")?;
        let day: u8 = Self::parse_number(day, "dd")?;

        Ok(Self::new(if negative { -year } else { year }, month, day)?)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl CalendarSystem for Gregorian {
    type Date = GregorianDate;

    fn name(&self) -> &'static str {
        GREGORIAN_METADATA.name
    }

    fn metadata(&self) -> &'static CalendarMetadata {
        &GREGORIAN_METADATA
    }

    fn leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        Ok(is_leap_year(Year::new(year)?.get()))
    }

    fn months_in_year(&self, year: i32) -> Result<u8, CalendarError> {
        Year::new(year)?;
        Ok(DECEMBER)
    }

    fn days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        let year = Year::new(year)?;
        Ok(days_in_month(year.get(), validate_month(month)?))
    }

    fn new_date(&self, year: i32, month: u8, day: u8) -> Result<GregorianDate, CalendarError> {
        GregorianDate::new(year, month, day)
    }

    fn date_to_julian_day(&self, date: GregorianDate) -> Result<JulianDay, CalendarError> {
        date.julian_day()
    }

    fn from_julian_day(&self, jd: JulianDay) -> Result<GregorianDate, CalendarError> {
        GregorianDate::from_julian_day(jd)
    }
}
