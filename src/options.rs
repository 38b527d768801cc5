use crate::consts::{DEFAULT_DATE_FORMAT, DEFAULT_YEAR_END, DEFAULT_YEAR_START};
use crate::types::Year;
use crate::{EthiopianDate, Pattern, PickerError};
use serde::{Deserialize, Serialize};

/// Settings of one date picker, deserializable from the options object a UI
/// hands over (`{"dateFormat": "dd/mm/yyyy", "yearStart": 1990, ...}`).
/// Missing keys take their defaults.
///
/// `min_date` and `max_date` are not enforced by navigation; callers check
/// candidates with [`PickerOptions::is_selectable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerOptions {
    pub date_format:          String,
    pub close_on_date_select: bool,
    /// Shown when the input is empty, instead of today
    pub default_date:         Option<EthiopianDate>,
    pub min_date:             Option<EthiopianDate>,
    pub max_date:             Option<EthiopianDate>,
    /// First entry of the year drop-down
    pub year_start:           i32,
    /// Last entry of the year drop-down
    pub year_end:             i32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            date_format:          DEFAULT_DATE_FORMAT.to_owned(),
            close_on_date_select: true,
            default_date:         None,
            min_date:             None,
            max_date:             None,
            year_start:           DEFAULT_YEAR_START,
            year_end:             DEFAULT_YEAR_END,
        }
    }
}

impl PickerOptions {
    /// Checks that the year and date bounds are usable.
    ///
    /// # Errors
    /// Returns `PickerError::Invalid` for a year bound that is zero or out of
    /// range, `EmptyYearRange` if `year_start > year_end`, and
    /// `EmptyDateRange` if `min_date > max_date`.
    pub fn validate(&self) -> Result<(), PickerError> {
        let start = Year::new(self.year_start)?;
        let end = Year::new(self.year_end)?;
        if start > end {
            return Err(PickerError::EmptyYearRange {
                start: self.year_start,
                end:   self.year_end,
            });
        }
        match (self.min_date, self.max_date) {
            (Some(min), Some(max)) if min > max => Err(PickerError::EmptyDateRange { min, max }),
            _ => Ok(()),
        }
    }

    /// The compiled `date_format`
    pub fn pattern(&self) -> Pattern {
        Pattern::new(&self.date_format)
    }

    /// Whether `date` lies within `min_date..=max_date`; open bounds always pass.
    pub fn is_selectable(&self, date: EthiopianDate) -> bool {
        self.min_date.is_none_or(|min| date >= min) && self.max_date.is_none_or(|max| date <= max)
    }
}
