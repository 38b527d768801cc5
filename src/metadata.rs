use serde::Serialize;

/// Static name tables and display defaults for one calendar.
///
/// Tables are indexed from zero: `month_names[0]` is the first month and
/// `day_names[0]` is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMetadata {
    pub name:              &'static str,
    /// Labels for years before and after the epoch
    pub epochs:            [&'static str; 2],
    pub month_names:       &'static [&'static str],
    pub month_names_short: &'static [&'static str],
    pub day_names:         [&'static str; 7],
    pub day_names_short:   [&'static str; 7],
    pub day_names_min:     [&'static str; 7],
    pub date_format:       &'static str,
    /// Index into `day_names` of the first column of a month grid
    pub first_day:         u8,
    pub is_rtl:            bool,
}

pub static ETHIOPIAN_METADATA: CalendarMetadata = CalendarMetadata {
    name:              "Ethiopian",
    epochs:            ["BEE", "EE"],
    month_names:       &[
        "Meskerem", "Tikemet", "Hidar", "Tahesas", "Tir", "Yekatit", "Megabit", "Miazia", "Genbot",
        "Sene", "Hamle", "Nehase", "Pagume",
    ],
    month_names_short: &[
        "Mes", "Tik", "Hid", "Tah", "Tir", "Yek", "Meg", "Mia", "Gen", "Sen", "Ham", "Neh", "Pag",
    ],
    day_names:         ["Ehud", "Segno", "Maksegno", "Irob", "Hamus", "Arb", "Kidame"],
    day_names_short:   ["Ehu", "Seg", "Mak", "Iro", "Ham", "Arb", "Kid"],
    day_names_min:     ["Eh", "Se", "Ma", "Ir", "Ha", "Ar", "Ki"],
    date_format:       crate::consts::DEFAULT_DATE_FORMAT,
    first_day:         0,
    is_rtl:            false,
};

pub static GREGORIAN_METADATA: CalendarMetadata = CalendarMetadata {
    name:              "Gregorian",
    epochs:            ["BCE", "CE"],
    month_names:       &[
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    month_names_short: &[
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    day_names:         [
        "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
    ],
    day_names_short:   ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    day_names_min:     ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    date_format:       "mm/dd/yyyy",
    first_day:         0,
    is_rtl:            false,
};

impl CalendarMetadata {
    /// Full name of a 1-based month
    pub fn month_name(&self, month: u8) -> Option<&'static str> {
        lookup(self.month_names, month)
    }

    /// Abbreviated name of a 1-based month
    pub fn month_name_short(&self, month: u8) -> Option<&'static str> {
        lookup(self.month_names_short, month)
    }

    /// Full name of a weekday, 0 = Sunday
    pub fn day_name(&self, weekday: u8) -> Option<&'static str> {
        self.day_names.get(usize::from(weekday)).copied()
    }

    pub fn day_name_short(&self, weekday: u8) -> Option<&'static str> {
        self.day_names_short.get(usize::from(weekday)).copied()
    }

    pub fn day_name_min(&self, weekday: u8) -> Option<&'static str> {
        self.day_names_min.get(usize::from(weekday)).copied()
    }

    /// Era label for a year: the first epoch label before year 1, the second after
    pub const fn epoch_label(&self, year: i32) -> &'static str {
        if year < 0 { self.epochs[0] } else { self.epochs[1] }
    }

    /// Weekday header for a month grid, starting at `first_day`
    pub fn week_header(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.day_names_min
            .iter()
            .cycle()
            .skip(usize::from(self.first_day))
            .take(self.day_names_min.len())
            .copied()
    }
}

fn lookup(names: &'static [&'static str], month: u8) -> Option<&'static str> {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| names.get(i))
        .copied()
}
