//! Shorthand constructors for tests. All of them panic on invalid input.

#![allow(clippy::unwrap_used)]

use crate::{EthiopianDate, GregorianDate, Month, Year};

pub fn year(value: i32) -> Year {
    Year::new(value).unwrap()
}

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn date(year: i32, month: u8, day: u8) -> EthiopianDate {
    EthiopianDate::new(year, month, day).unwrap()
}

pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).unwrap()
}
