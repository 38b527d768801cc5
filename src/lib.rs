//! Ethiopian calendar arithmetic and month-grid navigation for date pickers.
//!
//! The Ethiopian year has twelve 30-day months followed by Pagume, a short
//! thirteenth month of 5 days (6 in a leap year). Dates convert to and from
//! the Julian day, which also bridges them to the proleptic Gregorian
//! calendar.
//!
//! ```
//! use ethiopian_calendar::{CalendarSystem, Ethiopian, EthiopianDate, build_month_grid};
//!
//! let jd = Ethiopian.to_julian_day(2000, 1, 1)?;
//! assert_eq!(jd.value(), 2_454_355.5);
//! assert_eq!(EthiopianDate::from_julian_day(jd)?.to_string(), "2000-01-01");
//!
//! let grid = build_month_grid(2016, 13, None, None)?;
//! assert_eq!(grid.days().count(), 5);
//! # Ok::<(), ethiopian_calendar::CalendarError>(())
//! ```
//!
//! Nothing here reads the system clock: "today" is always supplied by the
//! caller, usually through [`EthiopianDate::from_gregorian`].

mod calendar;
mod consts;
mod error;
mod ethiopian;
mod format;
mod gregorian;
mod grid;
mod julian;
mod metadata;
mod navigator;
mod options;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{CalendarDate, CalendarSystem};
pub use consts::*;
pub use error::{CalendarError, ParseError, PickerError};
pub use ethiopian::{Ethiopian, EthiopianDate};
pub use format::{FormattedDate, Pattern, format_date, resolve_from_formatted_string};
pub use gregorian::{Gregorian, GregorianDate};
pub use grid::{MonthGrid, MonthGridCell, build_month_grid};
pub use julian::JulianDay;
pub use metadata::{CalendarMetadata, ETHIOPIAN_METADATA, GREGORIAN_METADATA};
pub use navigator::{Navigation, Navigator, next_month, previous_month};
pub use options::PickerOptions;
pub use types::{Day, Month, Year};
