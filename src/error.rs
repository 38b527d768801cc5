use crate::EthiopianDate;
use crate::consts::{MAX_YEAR, MIN_YEAR};

/// Value-validation failure raised by the conversion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CalendarError {
    /// Year zero, or a year outside the supported range.
    #[error("Invalid year: {0} (must be non-zero and within {min}..={max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month outside `1..=max`.
    #[error("Invalid month: {month} (must be 1-{max})")]
    InvalidMonth { month: u8, max: u8 },

    /// Day outside `1..=days_in_month(year, month)`.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// Julian day that is NaN or infinite.
    #[error("Julian day is not a finite number")]
    NonFiniteJulianDay,

    /// Julian day outside the interval both calendars can represent.
    #[error("Julian day number {0} is outside the supported range")]
    JulianDayOutOfRange(i64),
}

/// Failure to read a date out of a formatted string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,

    /// A literal character of the pattern was not found in the text.
    #[error("Expected {expected:?} at position {position}")]
    UnexpectedLiteral { expected: char, position: usize },

    /// A numeric field had no digits.
    #[error("Missing number for '{token}' at position {position}")]
    MissingNumber { token: &'static str, position: usize },

    /// A numeric field did not fit its type.
    #[error("Number out of range for '{token}': {value}")]
    NumberOutOfRange { token: &'static str, value: String },

    /// A month or day name field matched no known name.
    #[error("Unknown name for '{token}' at position {position}")]
    UnknownName { token: &'static str, position: usize },

    /// Text left over once every pattern token was consumed.
    #[error("Unexpected trailing text: {0:?}")]
    TrailingText(String),

    /// The pattern cannot determine this part of a date.
    #[error("Pattern does not contain a {0} field")]
    MissingField(&'static str),

    /// The numbers were read but do not form a valid date.
    #[error(transparent)]
    Invalid(#[from] CalendarError),
}

/// Rejected picker configuration or initial value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error("Year range {start}..={end} is empty")]
    EmptyYearRange { start: i32, end: i32 },

    #[error("minDate {min} is after maxDate {max}")]
    EmptyDateRange {
        min: EthiopianDate,
        max: EthiopianDate,
    },

    #[error(transparent)]
    Invalid(#[from] CalendarError),

    /// The initial input value did not match `dateFormat`.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_calendar_error_messages() {
        assert_eq!(
            CalendarError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be non-zero and within -999999..=999999)"
        );
        assert_eq!(
            CalendarError::InvalidMonth { month: 14, max: 13 }.to_string(),
            "Invalid month: 14 (must be 1-13)"
        );
        assert_eq!(
            CalendarError::InvalidDate {
                year:  2016,
                month: 13,
                day:   6,
            }
            .to_string(),
            "Invalid day 6 for month 2016-13"
        );
    }

    #[test]
    fn test_parse_error_wraps_calendar_error() {
        let err: ParseError = CalendarError::InvalidYear(0).into();
        assert_eq!(err, ParseError::Invalid(CalendarError::InvalidYear(0)));
        // transparent: same message as the wrapped error
        assert_eq!(err.to_string(), CalendarError::InvalidYear(0).to_string());
    }

    #[test]
    fn test_picker_error_messages() {
        let err = PickerError::EmptyDateRange {
            min: date(2016, 2, 1),
            max: date(2016, 1, 1),
        };
        assert_eq!(
            err.to_string(),
            "minDate 2016-02-01 is after maxDate 2016-01-01"
        );
        let err: PickerError = ParseError::EmptyInput.into();
        assert_eq!(err.to_string(), "Empty date string");
    }
}
