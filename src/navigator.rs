//! Month-by-month browsing state for one date picker.

use crate::types::{Month, Year};
use crate::{
    CalendarError, ETHIOPIAN_METADATA, EthiopianDate, MonthGrid, ParseError, Pattern,
    PickerError, PickerOptions,
};

/// The month after `month`, rolling Pagume over into Meskerem of the next
/// year. Stays put at Pagume of the last supported year.
pub fn next_month(year: Year, month: Month) -> (Year, Month) {
    match month.succ() {
        Some(month) => (year, month),
        None => year.succ().map_or((year, month), |year| (year, Month::FIRST)),
    }
}

/// The month before `month`, rolling Meskerem back into Pagume of the
/// previous year. Stays put at Meskerem of the first supported year.
pub fn previous_month(year: Year, month: Month) -> (Year, Month) {
    match month.pred() {
        Some(month) => (year, month),
        None => year.pred().map_or((year, month), |year| (year, Month::LAST)),
    }
}

/// Outcome of a navigator transition. A caller raises its `change` event
/// only for `Changed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Unchanged,
    Changed {
        from: EthiopianDate,
        to:   EthiopianDate,
    },
}

impl Navigation {
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// The anchor date of one picker and the transitions that move it.
///
/// Transitions only move the anchor; [`Navigator::grid`] renders the month
/// on demand. A day that does not exist in the target month (day 30 when
/// moving into Pagume) is pulled back to the month's last day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    options: PickerOptions,
    pattern: Pattern,
    anchor:  EthiopianDate,
    today:   EthiopianDate,
}

impl Navigator {
    /// Opens on `default_date` if set, otherwise on `today`.
    ///
    /// # Errors
    /// Returns the `PickerError` from [`PickerOptions::validate`].
    pub fn new(options: PickerOptions, today: EthiopianDate) -> Result<Self, PickerError> {
        options.validate()?;
        Ok(Self {
            pattern: options.pattern(),
            anchor: options.default_date.unwrap_or(today),
            options,
            today,
        })
    }

    /// Opens on the date in an input control's current `value`, read with
    /// `date_format`. An empty value falls back to [`Navigator::new`].
    ///
    /// # Errors
    /// Returns `PickerError::Parse` if a non-empty value does not match
    /// `date_format`, or the `PickerError` from [`PickerOptions::validate`].
    pub fn with_value(
        options: PickerOptions,
        value: &str,
        today: EthiopianDate,
    ) -> Result<Self, PickerError> {
        let mut navigator = Self::new(options, today)?;
        if !value.trim().is_empty() {
            navigator.anchor = navigator.pattern.parse(value)?;
        }
        Ok(navigator)
    }

    pub const fn anchor(&self) -> EthiopianDate {
        self.anchor
    }

    pub const fn today(&self) -> EthiopianDate {
        self.today
    }

    pub const fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Updates the caller's notion of today, e.g. after midnight. The anchor
    /// does not move.
    pub const fn set_today(&mut self, today: EthiopianDate) {
        self.today = today;
    }

    /// The month view around the anchor
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.anchor, Some(self.today))
    }

    /// Shows the following month
    pub fn next_month(&mut self) -> Navigation {
        let (year, month) = next_month(self.anchor.year_typed(), self.anchor.month_typed());
        self.move_within(year, month)
    }

    /// Shows the preceding month
    pub fn previous_month(&mut self) -> Navigation {
        let (year, month) = previous_month(self.anchor.year_typed(), self.anchor.month_typed());
        self.move_within(year, month)
    }

    pub fn go_today(&mut self) -> Navigation {
        self.move_to(self.today)
    }

    /// Jumps to an exact date.
    ///
    /// # Errors
    /// Returns the `CalendarError` for an invalid date; the anchor is left
    /// untouched.
    pub fn goto(&mut self, year: i32, month: u8, day: u8) -> Result<Navigation, CalendarError> {
        let date = EthiopianDate::new(year, month, day)?;
        Ok(self.move_to(date))
    }

    /// Jumps to the date typed into the input control.
    ///
    /// # Errors
    /// Returns the `ParseError` if `text` does not match `date_format`; the
    /// anchor is left untouched.
    pub fn parse(&mut self, text: &str) -> Result<Navigation, ParseError> {
        let date = self.pattern.parse(text)?;
        Ok(self.move_to(date))
    }

    /// Year drop-down: same month and day in `year`
    pub fn select_year(&mut self, year: Year) -> Navigation {
        self.move_within(year, self.anchor.month_typed())
    }

    /// Month drop-down: same year and day in `month`
    pub fn select_month(&mut self, month: Month) -> Navigation {
        self.move_within(self.anchor.year_typed(), month)
    }

    /// Picks a day of the month on display. Returns the transition along
    /// with the text for the input control.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the month has no such day.
    pub fn select_day(&mut self, day: u8) -> Result<(Navigation, String), CalendarError> {
        let date =
            EthiopianDate::from_parts(self.anchor.year_typed(), self.anchor.month_typed(), day)?;
        let navigation = self.move_to(date);
        Ok((navigation, self.formatted()))
    }

    /// The anchor rendered with `date_format`
    pub fn formatted(&self) -> String {
        self.pattern.format(&self.anchor)
    }

    /// Entries of the year drop-down
    pub fn year_choices(&self) -> impl Iterator<Item = i32> + use<> {
        (self.options.year_start..=self.options.year_end).filter(|&year| year != 0)
    }

    /// Entries of the month drop-down as `(number, name)`
    pub fn month_choices(&self) -> impl Iterator<Item = (u8, &'static str)> + use<> {
        (1..).zip(ETHIOPIAN_METADATA.month_names.iter().copied())
    }

    fn move_within(&mut self, year: Year, month: Month) -> Navigation {
        self.move_to(EthiopianDate::clamped(year, month, self.anchor.day()))
    }

    fn move_to(&mut self, to: EthiopianDate) -> Navigation {
        let from = std::mem::replace(&mut self.anchor, to);
        if from == to {
            Navigation::Unchanged
        } else {
            Navigation::Changed { from, to }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_YEAR, MIN_YEAR};
    use crate::test_utils::{date, month, year};

    fn navigator(anchor: EthiopianDate) -> Navigator {
        let options = PickerOptions {
            default_date: Some(anchor),
            ..PickerOptions::default()
        };
        Navigator::new(options, date(2016, 1, 15)).unwrap()
    }

    #[test]
    fn test_next_and_previous_month() {
        struct TestCase {
            from:     (i32, u8),
            next:     (i32, u8),
            previous: (i32, u8),
        }

        let cases = [
            TestCase {
                from:     (2016, 5),
                next:     (2016, 6),
                previous: (2016, 4),
            },
            TestCase {
                from:     (2016, 13),
                next:     (2017, 1),
                previous: (2016, 12),
            },
            TestCase {
                from:     (2016, 1),
                next:     (2016, 2),
                previous: (2015, 13),
            },
            TestCase {
                from:     (-1, 13),
                next:     (1, 1),
                previous: (-1, 12),
            },
            TestCase {
                from:     (1, 1),
                next:     (1, 2),
                previous: (-1, 13),
            },
            TestCase {
                from:     (MAX_YEAR, 13),
                next:     (MAX_YEAR, 13),
                previous: (MAX_YEAR, 12),
            },
            TestCase {
                from:     (MIN_YEAR, 1),
                next:     (MIN_YEAR, 2),
                previous: (MIN_YEAR, 1),
            },
        ];

        for case in &cases {
            let (y, m) = case.from;
            let (ny, nm) = next_month(year(y), month(m));
            let (py, pm) = previous_month(year(y), month(m));
            assert_eq!((ny.get(), nm.get()), case.next, "next of {:?}", case.from);
            assert_eq!((py.get(), pm.get()), case.previous, "previous of {:?}", case.from);
        }
    }

    #[test]
    fn test_next_previous_are_inverse() {
        for y in (-30..=30).filter(|&y| y != 0) {
            for m in 1..=13 {
                let (ny, nm) = next_month(year(y), month(m));
                assert_eq!(previous_month(ny, nm), (year(y), month(m)));
            }
        }
    }

    #[test]
    fn test_new_opens_on_default_or_today() {
        let today = date(2016, 1, 15);
        let nav = Navigator::new(PickerOptions::default(), today).unwrap();
        assert_eq!(nav.anchor(), today);
        assert_eq!(nav.today(), today);
        assert_eq!(navigator(date(2010, 3, 3)).anchor(), date(2010, 3, 3));

        let invalid = PickerOptions {
            year_start: 2100,
            year_end: 1900,
            ..PickerOptions::default()
        };
        assert!(Navigator::new(invalid, today).is_err());
    }

    #[test]
    fn test_with_value() {
        let today = date(2016, 1, 15);
        let nav = Navigator::with_value(PickerOptions::default(), "05/13/2015", today).unwrap();
        assert_eq!(nav.anchor(), date(2015, 13, 5));

        let nav = Navigator::with_value(PickerOptions::default(), "  ", today).unwrap();
        assert_eq!(nav.anchor(), today);

        assert_eq!(
            Navigator::with_value(PickerOptions::default(), "2015-13-05", today),
            Err(PickerError::Parse(ParseError::UnexpectedLiteral {
                expected: '/',
                position: 2,
            }))
        );
    }

    #[test]
    fn test_next_clamps_day_into_pagume() {
        let mut nav = navigator(date(2016, 12, 30));
        assert_eq!(
            nav.next_month(),
            Navigation::Changed {
                from: date(2016, 12, 30),
                to:   date(2016, 13, 5),
            }
        );
        assert_eq!(nav.next_month(), Navigation::Changed {
            from: date(2016, 13, 5),
            to:   date(2017, 1, 5),
        });
    }

    #[test]
    fn test_previous_crosses_year_zero() {
        let mut nav = navigator(date(1, 1, 10));
        assert!(nav.previous_month().is_changed());
        assert_eq!(nav.anchor(), date(-1, 13, 5));
    }

    #[test]
    fn test_saturates_at_the_bounds() {
        let mut nav = navigator(date(MAX_YEAR, 13, 1));
        assert_eq!(nav.next_month(), Navigation::Unchanged);
        let mut nav = navigator(date(MIN_YEAR, 1, 1));
        assert_eq!(nav.previous_month(), Navigation::Unchanged);
    }

    #[test]
    fn test_go_today() {
        let mut nav = navigator(date(2010, 3, 3));
        assert_eq!(nav.go_today(), Navigation::Changed {
            from: date(2010, 3, 3),
            to:   date(2016, 1, 15),
        });
        assert_eq!(nav.go_today(), Navigation::Unchanged);

        nav.set_today(date(2016, 1, 16));
        assert_eq!(nav.anchor(), date(2016, 1, 15));
        assert!(nav.go_today().is_changed());
    }

    #[test]
    fn test_goto_and_parse_leave_anchor_on_error() {
        let mut nav = navigator(date(2016, 1, 1));
        assert_eq!(
            nav.goto(2016, 13, 6),
            Err(CalendarError::InvalidDate {
                year:  2016,
                month: 13,
                day:   6,
            })
        );
        assert_eq!(nav.anchor(), date(2016, 1, 1));
        assert!(nav.parse("not a date").is_err());
        assert_eq!(nav.anchor(), date(2016, 1, 1));

        assert!(nav.goto(2015, 13, 6).unwrap().is_changed());
        assert_eq!(nav.parse("06/13/2015"), Ok(Navigation::Unchanged));
        assert!(nav.parse("01/01/2016").unwrap().is_changed());
    }

    #[test]
    fn test_select_year_and_month() {
        let mut nav = navigator(date(2015, 13, 6));
        // Pagume 6 does not exist in 2016
        assert!(nav.select_year(year(2016)).is_changed());
        assert_eq!(nav.anchor(), date(2016, 13, 5));
        assert!(nav.select_month(month(4)).is_changed());
        assert_eq!(nav.anchor(), date(2016, 4, 5));
        assert_eq!(nav.select_month(month(4)), Navigation::Unchanged);
    }

    #[test]
    fn test_select_day_reports_transition() {
        struct TestCase {
            day:      u8,
            expected: Result<(Navigation, &'static str), CalendarError>,
            anchor:   EthiopianDate,
        }

        let test_cases = [
            TestCase {
                day:      5,
                expected: Ok((
                    Navigation::Changed {
                        from: date(2016, 13, 1),
                        to:   date(2016, 13, 5),
                    },
                    "05/13/2016",
                )),
                anchor:   date(2016, 13, 5),
            },
            TestCase {
                day:      5,
                expected: Ok((Navigation::Unchanged, "05/13/2016")),
                anchor:   date(2016, 13, 5),
            },
            TestCase {
                day:      6,
                expected: Err(CalendarError::InvalidDate {
                    year:  2016,
                    month: 13,
                    day:   6,
                }),
                anchor:   date(2016, 13, 5),
            },
        ];

        let mut nav = navigator(date(2016, 13, 1));
        for TestCase {
            day,
            expected,
            anchor,
        } in test_cases
        {
            let result = nav.select_day(day);
            assert_eq!(
                result.as_ref().map(|(navigation, text)| (*navigation, text.as_str())),
                expected.as_ref().map(|&(navigation, text)| (navigation, text)),
                "day {day}"
            );
            assert_eq!(nav.anchor(), anchor);
        }
        assert_eq!(nav.formatted(), "05/13/2016");
    }

    #[test]
    fn test_grid_follows_anchor() {
        let mut nav = navigator(date(2016, 1, 1));
        nav.next_month();
        let grid = nav.grid();
        assert_eq!((grid.year(), grid.month()), (2016, 2));
        // today is in the first month, not the one on display
        assert!(!grid.cells().iter().any(crate::MonthGridCell::is_today));
        nav.go_today();
        assert_eq!(nav.grid().cells().iter().filter(|c| c.is_today()).count(), 1);
    }

    #[test]
    fn test_choices() {
        let options = PickerOptions {
            year_start: -2,
            year_end: 2,
            ..PickerOptions::default()
        };
        let nav = Navigator::new(options, date(1, 1, 1)).unwrap();
        assert_eq!(nav.year_choices().collect::<Vec<_>>(), [-2, -1, 1, 2]);
        let months: Vec<_> = nav.month_choices().collect();
        assert_eq!(months.len(), 13);
        assert_eq!(months[0], (1, "Meskerem"));
        assert_eq!(months[12], (13, "Pagume"));

        let defaults = navigator(date(2016, 1, 1));
        assert_eq!(defaults.year_choices().count(), 201);
    }
}
