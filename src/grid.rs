use crate::consts::DAYS_IN_WEEK;
use crate::types::{Month, Year};
use crate::{CalendarError, ETHIOPIAN_METADATA, EthiopianDate};
use serde::Serialize;

/// One slot of a month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MonthGridCell {
    /// Padding before the first day so it lands under its weekday
    Blank,
    Day {
        date:     EthiopianDate,
        #[serde(rename = "isToday")]
        is_today: bool,
    },
}

impl MonthGridCell {
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub const fn date(&self) -> Option<EthiopianDate> {
        match self {
            Self::Blank => None,
            Self::Day { date, .. } => Some(*date),
        }
    }

    pub const fn is_today(&self) -> bool {
        matches!(self, Self::Day { is_today: true, .. })
    }
}

/// The cells of one Ethiopian month, laid out for a seven-column view.
///
/// The grid starts with as many blanks as the weekday of the 1st of the
/// month, followed by one cell per day. It is a snapshot: navigating away
/// builds a new grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    anchor:         EthiopianDate,
    leading_blanks: u8,
    cells:          Vec<MonthGridCell>,
}

impl MonthGrid {
    /// Builds the grid of the month containing `anchor`, flagging `today`
    /// if it falls inside that month.
    pub fn new(anchor: EthiopianDate, today: Option<EthiopianDate>) -> Self {
        let first = EthiopianDate::first_of_month(anchor.year_typed(), anchor.month_typed());
        let leading_blanks =
            (first.day_of_week() + DAYS_IN_WEEK - ETHIOPIAN_METADATA.first_day) % DAYS_IN_WEEK;
        let days_in_month = anchor.days_in_month();

        let mut cells = Vec::with_capacity(usize::from(leading_blanks + days_in_month));
        cells.extend((0..leading_blanks).map(|_| MonthGridCell::Blank));
        cells.extend((1..=days_in_month).map(|day| {
            let date = EthiopianDate::clamped(anchor.year_typed(), anchor.month_typed(), day);
            MonthGridCell::Day {
                date,
                is_today: today == Some(date),
            }
        }));

        Self {
            anchor,
            leading_blanks,
            cells,
        }
    }

    /// The date the grid was built around
    pub const fn anchor(&self) -> EthiopianDate {
        self.anchor
    }

    pub const fn year(&self) -> i32 {
        self.anchor.year()
    }

    pub const fn month(&self) -> u8 {
        self.anchor.month()
    }

    pub const fn leading_blanks(&self) -> u8 {
        self.leading_blanks
    }

    pub fn cells(&self) -> &[MonthGridCell] {
        &self.cells
    }

    /// The day cells only, in order
    pub fn days(&self) -> impl Iterator<Item = EthiopianDate> + '_ {
        self.cells.iter().filter_map(MonthGridCell::date)
    }

    /// Rows of seven cells; the last row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[MonthGridCell]> {
        self.cells.chunks(usize::from(DAYS_IN_WEEK))
    }

    /// Column headers matching [`MonthGrid::weeks`]
    pub fn week_header(&self) -> impl Iterator<Item = &'static str> {
        ETHIOPIAN_METADATA.week_header()
    }

    /// Header text, e.g. "Meskerem 2016"
    pub fn title(&self) -> String {
        format!("{} {}", self.anchor.month_name(), self.anchor.year())
    }
}

/// Builds the grid for `year`/`month`, anchored on `day` (the 1st when absent).
///
/// # Errors
/// Returns the `CalendarError` for an invalid year, month or day.
pub fn build_month_grid(
    year: i32,
    month: u8,
    day: Option<u8>,
    today: Option<EthiopianDate>,
) -> Result<MonthGrid, CalendarError> {
    let year = Year::new(year)?;
    let month = Month::new(month)?;
    let anchor = match day {
        Some(day) => EthiopianDate::from_parts(year, month, day)?,
        None => EthiopianDate::first_of_month(year, month),
    };
    Ok(MonthGrid::new(anchor, today))
}
