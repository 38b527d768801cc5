/// Julian day of the Ethiopian epoch: 27 August 8 CE (Gregorian), at midnight
pub const ETHIOPIAN_EPOCH: f64 = 1_724_220.5;

/// Integer day number of the Ethiopian epoch (`ETHIOPIAN_EPOCH` minus the half day)
pub(crate) const ETHIOPIAN_EPOCH_DAY: i64 = 1_724_220;

/// Smallest supported year (inclusive)
pub const MIN_YEAR: i32 = -999_999;
/// Largest supported year (inclusive)
pub const MAX_YEAR: i32 = 999_999;

/// Number of months in every Ethiopian year
pub const MONTHS_IN_YEAR: u8 = 13;

/// First month of the year (Meskerem)
pub const MESKEREM: u8 = 1;
/// The short epagomenal month
pub const PAGUME: u8 = 13;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Length of each of the twelve regular months
pub const DAYS_IN_REGULAR_MONTH: u8 = 30;
/// Length of Pagume in a common year
pub const PAGUME_DAYS: u8 = 5;
/// Length of Pagume in a leap year
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Days in a common Ethiopian year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap Ethiopian year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// A leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Days in one full 4-year leap cycle
pub(crate) const DAYS_IN_LEAP_CYCLE: i64 = 1461;

/// Offset added to the integer day number so that 0 is Sunday
pub(crate) const WEEKDAY_ALIGNMENT: i64 = 2;

/// Default pattern used to format and parse dates
pub const DEFAULT_DATE_FORMAT: &str = "dd/mm/yyyy";
/// Pattern used by `Display`/`FromStr`
pub const ISO_DATE_FORMAT: &str = "yyyy-mm-dd";

/// Default first year offered by a year selector
pub const DEFAULT_YEAR_START: i32 = 1900;
/// Default last year offered by a year selector
pub const DEFAULT_YEAR_END: i32 = 2100;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Century years are not Gregorian leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one 400-year Gregorian era
pub(crate) const DAYS_IN_GREGORIAN_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01 (proleptic Gregorian)
pub(crate) const DAYS_TO_UNIX_EPOCH: i64 = 719_468;
/// Day number of 1970-01-01 (its Julian day minus the half day)
pub(crate) const UNIX_EPOCH_DAY_NUMBER: i64 = 2_440_587;
