//! Date patterns such as `dd/mm/yyyy`, used to render an [`EthiopianDate`]
//! into an input control and to read it back.
//!
//! | token  | meaning                                   |
//! |--------|-------------------------------------------|
//! | `d`    | day of month                              |
//! | `dd`   | day of month, two digits                  |
//! | `o`    | day of year                               |
//! | `oo`   | day of year, three digits                 |
//! | `D`    | short day name                            |
//! | `DD`   | full day name                             |
//! | `w`    | week of year                              |
//! | `ww`   | week of year, two digits                  |
//! | `m`    | month                                     |
//! | `mm`   | month, two digits                         |
//! | `M`    | short month name                          |
//! | `MM`   | full month name                           |
//! | `yyyy` | year, four digits with a `-` before the era |
//! | `J`    | Julian day                                |
//! | `'..'` | literal text; `''` is a single quote      |
//!
//! Any other character is matched literally.

use crate::consts::DAYS_IN_REGULAR_MONTH;
use crate::prelude::*;
use crate::{ETHIOPIAN_METADATA, EthiopianDate, JulianDay, ParseError};
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

const QUOTE: char = '\'';
const YEAR_TOKEN: &str = "yyyy";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Day { padded: bool },
    DayOfYear { padded: bool },
    DayName { long: bool },
    Week { padded: bool },
    Month { padded: bool },
    MonthName { long: bool },
    Year,
    JulianDay,
    Literal(String),
}

impl Token {
    const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Day { .. }
                | Self::DayOfYear { .. }
                | Self::Week { .. }
                | Self::Month { .. }
                | Self::Year
                | Self::JulianDay
        )
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Day { padded: false } => "d",
            Self::Day { padded: true } => "dd",
            Self::DayOfYear { padded: false } => "o",
            Self::DayOfYear { padded: true } => "oo",
            Self::DayName { long: false } => "D",
            Self::DayName { long: true } => "DD",
            Self::Week { padded: false } => "w",
            Self::Week { padded: true } => "ww",
            Self::Month { padded: false } => "m",
            Self::Month { padded: true } => "mm",
            Self::MonthName { long: false } => "M",
            Self::MonthName { long: true } => "MM",
            Self::Year => YEAR_TOKEN,
            Self::JulianDay => "J",
            Self::Literal(_) => "literal",
        }
    }

    /// Digits always written for this token, when that count is fixed
    const fn fixed_width(&self) -> Option<usize> {
        match self {
            Self::Day { padded: true } | Self::Month { padded: true } | Self::Week { padded: true } => {
                Some(2)
            }
            Self::DayOfYear { padded: true } => Some(3),
            _ => None,
        }
    }
}

/// Digits a `yyyy` field may take while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearWidth {
    /// No numeric field follows: every digit belongs to the year
    Unbounded,
    /// A variable-width numeric field follows
    AtMost(usize),
    /// Fixed-width numeric fields follow and need this many digits
    Reserve(usize),
}

impl YearWidth {
    fn for_following(tokens: &[Token]) -> Self {
        if !tokens.first().is_some_and(Token::is_numeric) {
            return Self::Unbounded;
        }
        let mut reserved = 0;
        for token in tokens.iter().take_while(|token| token.is_numeric()) {
            match token.fixed_width() {
                Some(width) => reserved += width,
                None => return Self::AtMost(YEAR_TOKEN.len()),
            }
        }
        Self::Reserve(reserved)
    }
}

/// A compiled date pattern.
///
/// Compiling never fails: characters that are not tokens are literals.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{source}")]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Self {
        Self {
            source: pattern.to_owned(),
            tokens: tokenize(pattern),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders `date` with this pattern.
    pub fn format(&self, date: &EthiopianDate) -> String {
        self.display(date).to_string()
    }

    /// `date` rendered lazily, for use in `format!` and friends
    pub const fn display<'a>(&'a self, date: &'a EthiopianDate) -> FormattedDate<'a> {
        FormattedDate {
            pattern: self,
            date,
        }
    }

    /// Reads a date laid out by this pattern.
    ///
    /// Whitespace around the text is ignored unless the pattern itself
    /// starts or ends with whitespace. Day names and week numbers are
    /// consumed but do not affect the result.
    ///
    /// # Errors
    /// Returns a `ParseError` when the text does not follow the pattern,
    /// when the pattern cannot determine a full date, or when the numbers
    /// read do not form a valid Ethiopian date.
    pub fn parse(&self, text: &str) -> Result<EthiopianDate, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut cursor = Cursor::new(self.trim_outside(text));
        let mut fields = Fields::default();

        for (i, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Day { .. } => fields.day = Some(cursor.number(token.name(), 2)?),
                Token::DayOfYear { .. } => {
                    fields.day_of_year = Some(cursor.number(token.name(), 3)?);
                }
                Token::Week { .. } => {
                    cursor.number::<u8>(token.name(), 2)?;
                }
                Token::Month { .. } => fields.month = Some(cursor.number(token.name(), 2)?),
                Token::DayName { long } => {
                    let names: &[&str] = if *long {
                        &ETHIOPIAN_METADATA.day_names
                    } else {
                        &ETHIOPIAN_METADATA.day_names_short
                    };
                    cursor.name(token.name(), names)?;
                }
                Token::MonthName { long } => {
                    let names = if *long {
                        ETHIOPIAN_METADATA.month_names
                    } else {
                        ETHIOPIAN_METADATA.month_names_short
                    };
                    let index = cursor.name(token.name(), names)?;
                    // at most 13 names
                    fields.month = u8::try_from(index + 1).ok();
                }
                Token::Year => {
                    let width = YearWidth::for_following(&self.tokens[i + 1..]);
                    fields.year = Some(cursor.signed_year(width)?);
                }
                Token::JulianDay => fields.julian_day = Some(cursor.julian_day()?),
                Token::Literal(literal) => cursor.literal(literal)?,
            }
        }

        if !cursor.rest().is_empty() {
            return Err(ParseError::TrailingText(cursor.rest().to_owned()));
        }
        fields.resolve()
    }

    /// Strips whitespace from the ends of `text` that the pattern does not
    /// match itself.
    fn trim_outside<'t>(&self, text: &'t str) -> &'t str {
        let starts_blank = matches!(
            self.tokens.first(),
            Some(Token::Literal(literal)) if literal.starts_with(char::is_whitespace)
        );
        let ends_blank = matches!(
            self.tokens.last(),
            Some(Token::Literal(literal)) if literal.ends_with(char::is_whitespace)
        );
        let text = if starts_blank { text } else { text.trim_start() };
        if ends_blank { text } else { text.trim_end() }
    }
}

/// A date paired with the pattern that renders it.
#[derive(Debug, Clone, Copy)]
pub struct FormattedDate<'a> {
    pattern: &'a Pattern,
    date:    &'a EthiopianDate,
}

impl fmt::Display for FormattedDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pattern
            .tokens
            .iter()
            .try_for_each(|token| write_token(f, token, self.date))
    }
}

impl From<&str> for Pattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

/// Renders `date` with `pattern`.
pub fn format_date(pattern: &str, date: &EthiopianDate) -> String {
    Pattern::new(pattern).format(date)
}

/// Reads a date that was rendered with `pattern`.
///
/// # Errors
/// See [`Pattern::parse`].
pub fn resolve_from_formatted_string(pattern: &str, text: &str) -> Result<EthiopianDate, ParseError> {
    Pattern::new(pattern).parse(text)
}

fn write_token(f: &mut fmt::Formatter<'_>, token: &Token, date: &EthiopianDate) -> fmt::Result {
    match token {
        Token::Day { padded } => write_number(f, date.day(), *padded, 2),
        Token::DayOfYear { padded } => write_number(f, date.day_of_year(), *padded, 3),
        Token::DayName { long } => {
            let weekday = usize::from(date.day_of_week());
            f.write_str(if *long {
                ETHIOPIAN_METADATA.day_names[weekday]
            } else {
                ETHIOPIAN_METADATA.day_names_short[weekday]
            })
        }
        Token::Week { padded } => write_number(f, date.week_of_year(), *padded, 2),
        Token::Month { padded } => write_number(f, date.month(), *padded, 2),
        Token::MonthName { long } => {
            let index = usize::from(date.month() - 1);
            f.write_str(if *long {
                ETHIOPIAN_METADATA.month_names[index]
            } else {
                ETHIOPIAN_METADATA.month_names_short[index]
            })
        }
        Token::Year => {
            let sign = if date.year() < 0 { "-" } else { "" };
            write!(f, "{sign}{:04}", date.year().unsigned_abs())
        }
        Token::JulianDay => write!(f, "{}", date.julian_day()),
        Token::Literal(text) => f.write_str(text),
    }
}

fn write_number<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    value: T,
    padded: bool,
    width: usize,
) -> fmt::Result {
    if padded {
        write!(f, "{value:0width$}")
    } else {
        write!(f, "{value}")
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let token = match c {
            'd' => Token::Day {
                padded: doubled(&mut chars, c),
            },
            'o' => Token::DayOfYear {
                padded: doubled(&mut chars, c),
            },
            'D' => Token::DayName {
                long: doubled(&mut chars, c),
            },
            'w' => Token::Week {
                padded: doubled(&mut chars, c),
            },
            'm' => Token::Month {
                padded: doubled(&mut chars, c),
            },
            'M' => Token::MonthName {
                long: doubled(&mut chars, c),
            },
            'J' => Token::JulianDay,
            'y' if chars.clone().take(3).filter(|&n| n == 'y').count() == 3 => {
                chars.nth(2);
                Token::Year
            }
            QUOTE => {
                if chars.next_if_eq(&QUOTE).is_some() {
                    literal.push(QUOTE);
                } else {
                    // unterminated quotes run to the end of the pattern
                    literal.extend(chars.by_ref().take_while(|&n| n != QUOTE));
                }
                continue;
            }
            other => {
                literal.push(other);
                continue;
            }
        };
        if !literal.is_empty() {
            tokens.push(Token::Literal(std::mem::take(&mut literal)));
        }
        tokens.push(token);
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

/// Consumes a second `c`, turning `d` into `dd` and so on.
fn doubled(chars: &mut Peekable<Chars<'_>>, c: char) -> bool {
    chars.next_if_eq(&c).is_some()
}

/// Values collected while reading a formatted string.
#[derive(Debug, Default)]
struct Fields {
    year:        Option<i32>,
    month:       Option<u8>,
    day:         Option<u8>,
    day_of_year: Option<u16>,
    julian_day:  Option<JulianDay>,
}

impl Fields {
    fn resolve(self) -> Result<EthiopianDate, ParseError> {
        if let Some(jd) = self.julian_day {
            return Ok(EthiopianDate::from_julian_day(jd)?);
        }
        let year = self.year.ok_or(ParseError::MissingField("year"))?;
        let (month, day) = match (self.month, self.day, self.day_of_year) {
            (Some(month), Some(day), _) => (month, day),
            (_, _, Some(ordinal)) => month_and_day(ordinal)?,
            (None, _, None) => return Err(ParseError::MissingField("month")),
            (Some(_), None, None) => return Err(ParseError::MissingField("day")),
        };
        Ok(EthiopianDate::new(year, month, day)?)
    }
}

fn month_and_day(ordinal: u16) -> Result<(u8, u8), ParseError> {
    let out_of_range = || ParseError::NumberOutOfRange {
        token: "o",
        value: ordinal.to_string(),
    };
    let index = ordinal.checked_sub(1).ok_or_else(out_of_range)?;
    let month = u8::try_from(index / u16::from(DAYS_IN_REGULAR_MONTH) + 1)
        .map_err(|_| out_of_range())?;
    let day = u8::try_from(index % u16::from(DAYS_IN_REGULAR_MONTH) + 1)
        .map_err(|_| out_of_range())?;
    Ok((month, day))
}

struct Cursor<'a> {
    text: &'a str,
    pos:  usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn literal(&mut self, literal: &str) -> Result<(), ParseError> {
        for expected in literal.chars() {
            match self.rest().strip_prefix(expected) {
                Some(_) => self.pos += expected.len_utf8(),
                None => {
                    return Err(ParseError::UnexpectedLiteral {
                        expected,
                        position: self.pos,
                    });
                }
            }
        }
        Ok(())
    }

    /// Takes up to `max` ASCII digits.
    fn digits(&mut self, token: &'static str, max: usize) -> Result<&'a str, ParseError> {
        let rest = self.rest();
        let len = rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len == 0 {
            return Err(ParseError::MissingNumber {
                token,
                position: self.pos,
            });
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    fn number<T: std::str::FromStr>(
        &mut self,
        token: &'static str,
        max: usize,
    ) -> Result<T, ParseError> {
        let digits = self.digits(token, max)?;
        digits.parse().map_err(|_| ParseError::NumberOutOfRange {
            token,
            value: digits.to_owned(),
        })
    }

    fn signed_year(&mut self, width: YearWidth) -> Result<i32, ParseError> {
        let negative = self.rest().starts_with('-');
        if negative {
            self.pos += 1;
        }
        let max = match width {
            YearWidth::Unbounded => usize::MAX,
            YearWidth::AtMost(max) => max,
            YearWidth::Reserve(reserved) => {
                let run = self.rest().bytes().take_while(u8::is_ascii_digit).count();
                run.saturating_sub(reserved)
            }
        };
        let year: i32 = self.number(YEAR_TOKEN, max)?;
        Ok(if negative { -year } else { year })
    }

    fn julian_day(&mut self) -> Result<JulianDay, ParseError> {
        let start = self.pos;
        if self.rest().starts_with('-') {
            self.pos += 1;
        }
        self.digits("J", usize::MAX)?;
        if self.rest().starts_with('.') {
            self.pos += 1;
            let fraction = self.rest().bytes().take_while(u8::is_ascii_digit).count();
            self.pos += fraction;
        }
        let text = &self.text[start..self.pos];
        let value: f64 = text.parse().map_err(|_| ParseError::NumberOutOfRange {
            token: "J",
            value: text.to_owned(),
        })?;
        Ok(JulianDay::new(value)?)
    }

    /// Matches the longest name at the cursor, ignoring case, and returns its index.
    fn name(&mut self, token: &'static str, names: &[&str]) -> Result<usize, ParseError> {
        let rest = self.rest();
        let (index, len) = names
            .iter()
            .enumerate()
            .filter(|(_, name)| {
                rest.get(..name.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(name))
            })
            .map(|(i, name)| (i, name.len()))
            .max_by_key(|&(_, len)| len)
            .ok_or(ParseError::UnknownName {
                token,
                position: self.pos,
            })?;
        self.pos += len;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CalendarError;
    use crate::consts::{DEFAULT_DATE_FORMAT, ISO_DATE_FORMAT, MAX_YEAR};
    use crate::test_utils::date;

    #[test]
    fn test_format_tokens() {
        struct TestCase {
            pattern:  &'static str,
            expected: &'static str,
        }

        // 2016-01-01 EE is a Tuesday (Maksegno)
        let d = date(2016, 1, 1);
        let cases = [
            TestCase {
                pattern:  "dd/mm/yyyy",
                expected: "01/01/2016",
            },
            TestCase {
                pattern:  "d/m/yyyy",
                expected: "1/1/2016",
            },
            TestCase {
                pattern:  "yyyy-mm-dd",
                expected: "2016-01-01",
            },
            TestCase {
                pattern:  "DD, MM d, yyyy",
                expected: "Maksegno, Meskerem 1, 2016",
            },
            TestCase {
                pattern:  "D M dd",
                expected: "Mak Mes 01",
            },
            TestCase {
                pattern:  "o oo w ww",
                expected: "1 001 53 53",
            },
            TestCase {
                pattern:  "J",
                expected: "2460199.5",
            },
            TestCase {
                pattern:  "'day' d 'of' MM",
                expected: "day 1 of Meskerem",
            },
            TestCase {
                pattern:  "d''m",
                expected: "1'1",
            },
        ];

        for case in &cases {
            assert_eq!(
                format_date(case.pattern, &d),
                case.expected,
                "pattern {:?}",
                case.pattern
            );
        }
    }

    #[test]
    fn test_format_negative_year() {
        assert_eq!(format_date(DEFAULT_DATE_FORMAT, &date(-44, 3, 7)), "07/03/-0044");
        assert_eq!(format_date(ISO_DATE_FORMAT, &date(12345, 13, 5)), "12345-13-05");
    }

    #[test]
    fn test_parse_default_format() {
        assert_eq!(
            resolve_from_formatted_string("dd/mm/yyyy", "05/13/2016").unwrap(),
            date(2016, 13, 5)
        );
        assert_eq!(
            resolve_from_formatted_string("dd/mm/yyyy", " 5/1/2016 ").unwrap(),
            date(2016, 1, 5)
        );
    }

    #[test]
    fn test_parse_names_case_insensitive() {
        let pattern = Pattern::new("DD, MM d, yyyy");
        assert_eq!(
            pattern.parse("maksegno, MESKEREM 1, 2016").unwrap(),
            date(2016, 1, 1)
        );
        // the day name is not checked against the date
        assert_eq!(pattern.parse("Ehud, Pagume 3, 2016").unwrap(), date(2016, 13, 3));
        assert_eq!(
            Pattern::new("M d yyyy").parse("Tah 4 2016").unwrap(),
            date(2016, 4, 4)
        );
    }

    #[test]
    fn test_parse_compact_year() {
        assert_eq!(
            resolve_from_formatted_string("yyyymmdd", "20161305").unwrap(),
            date(2016, 13, 5)
        );
        assert_eq!(
            resolve_from_formatted_string("yyyymmdd", "-00440307").unwrap(),
            date(-44, 3, 7)
        );
    }

    #[test]
    fn test_parse_compact_year_beyond_four_digits() {
        let pattern = Pattern::new("yyyymmdd");
        assert_eq!(pattern.format(&date(12345, 1, 1)), "123450101");
        assert_eq!(pattern.parse("123450101").unwrap(), date(12345, 1, 1));
        assert_eq!(pattern.parse("-123450101").unwrap(), date(-12345, 1, 1));
        assert_eq!(
            Pattern::new("yyyyoo").parse("12347366").unwrap(),
            date(12347, 13, 6)
        );
        // an unpadded field after the year leaves it at four digits
        assert_eq!(
            resolve_from_formatted_string("yyyymd", "201615").unwrap(),
            date(2016, 1, 5)
        );
        assert_eq!(
            pattern.parse("0101"),
            Err(ParseError::MissingNumber {
                token:    "yyyy",
                position: 0,
            })
        );
    }

    #[test]
    fn test_year_width_for_following_tokens() {
        assert_eq!(YearWidth::for_following(&tokenize("")), YearWidth::Unbounded);
        assert_eq!(YearWidth::for_following(&tokenize("-mm")), YearWidth::Unbounded);
        assert_eq!(YearWidth::for_following(&tokenize("mmdd")), YearWidth::Reserve(4));
        assert_eq!(YearWidth::for_following(&tokenize("oo/dd")), YearWidth::Reserve(3));
        assert_eq!(YearWidth::for_following(&tokenize("mmd")), YearWidth::AtMost(4));
    }

    #[test]
    fn test_parse_keeps_whitespace_the_pattern_matches() {
        let trailing = Pattern::new("dd/mm/yyyy ");
        assert_eq!(trailing.format(&date(2016, 1, 5)), "05/01/2016 ");
        assert_eq!(trailing.parse("05/01/2016 ").unwrap(), date(2016, 1, 5));
        let leading = Pattern::new(" dd/mm/yyyy");
        assert_eq!(leading.parse(" 05/01/2016").unwrap(), date(2016, 1, 5));
        // whitespace outside the pattern is still ignored
        assert_eq!(trailing.parse("  05/01/2016 ").unwrap(), date(2016, 1, 5));
        assert_eq!(leading.parse(" 05/01/2016  ").unwrap(), date(2016, 1, 5));
        assert_eq!(
            trailing.parse("05/01/2016"),
            Err(ParseError::UnexpectedLiteral {
                expected: ' ',
                position: 10,
            })
        );
    }

    #[test]
    fn test_display_adapter() {
        let pattern = Pattern::new("MM d, yyyy");
        let d = date(2016, 13, 5);
        assert_eq!(format!("[{}]", pattern.display(&d)), "[Pagume 5, 2016]");
        assert_eq!(pattern.display(&d).to_string(), pattern.format(&d));
    }

    #[test]
    fn test_parse_day_of_year_and_julian_day() {
        assert_eq!(
            resolve_from_formatted_string("o/yyyy", "366/2015").unwrap(),
            date(2015, 13, 6)
        );
        assert_eq!(
            resolve_from_formatted_string("oo yyyy", "031 2016").unwrap(),
            date(2016, 2, 1)
        );
        assert_eq!(
            resolve_from_formatted_string("J", "2454355.5").unwrap(),
            date(2000, 1, 1)
        );
        assert_eq!(
            resolve_from_formatted_string("o/yyyy", "366/2016"),
            Err(ParseError::Invalid(CalendarError::InvalidDate {
                year:  2016,
                month: 13,
                day:   6,
            }))
        );
        assert!(matches!(
            resolve_from_formatted_string("o/yyyy", "0/2016"),
            Err(ParseError::NumberOutOfRange { token: "o", .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            pattern:  &'static str,
            text:     &'static str,
            expected: ParseError,
        }

        let cases = [
            TestCase {
                pattern:  "dd/mm/yyyy",
                text:     "",
                expected: ParseError::EmptyInput,
            },
            TestCase {
                pattern:  "dd/mm/yyyy",
                text:     "05-13-2016",
                expected: ParseError::UnexpectedLiteral {
                    expected: '/',
                    position: 2,
                },
            },
            TestCase {
                pattern:  "dd/mm/yyyy",
                text:     "05//2016",
                expected: ParseError::MissingNumber {
                    token:    "mm",
                    position: 3,
                },
            },
            TestCase {
                pattern:  "dd/mm/yyyy",
                text:     "05/13/2016x",
                expected: ParseError::TrailingText("x".to_owned()),
            },
            TestCase {
                pattern:  "MM yyyy",
                text:     "Jan 2016",
                expected: ParseError::UnknownName {
                    token:    "MM",
                    position: 0,
                },
            },
            TestCase {
                pattern:  "dd/mm",
                text:     "05/13",
                expected: ParseError::MissingField("year"),
            },
            TestCase {
                pattern:  "mm/yyyy",
                text:     "13/2016",
                expected: ParseError::MissingField("day"),
            },
            TestCase {
                pattern:  "dd/mm/yyyy",
                text:     "06/13/2016",
                expected: ParseError::Invalid(CalendarError::InvalidDate {
                    year:  2016,
                    month: 13,
                    day:   6,
                }),
            },
            TestCase {
                pattern:  "dd/mm/yyyy",
                text:     "01/14/2016",
                expected: ParseError::Invalid(CalendarError::InvalidMonth { month: 14, max: 13 }),
            },
            TestCase {
                pattern:  "dd/mm/yyyy",
                text:     "01/01/0",
                expected: ParseError::Invalid(CalendarError::InvalidYear(0)),
            },
            TestCase {
                pattern:  "dd/mm/yyyy",
                text:     "01/01/99999999999",
                expected: ParseError::NumberOutOfRange {
                    token: "yyyy",
                    value: "99999999999".to_owned(),
                },
            },
        ];

        for case in &cases {
            assert_eq!(
                resolve_from_formatted_string(case.pattern, case.text),
                Err(case.expected.clone()),
                "{:?} with {:?}",
                case.text,
                case.pattern
            );
        }
    }

    #[test]
    fn test_format_parse_round_trip() {
        let patterns = [
            DEFAULT_DATE_FORMAT,
            ISO_DATE_FORMAT,
            "d/m/yyyy",
            "yyyymmdd",
            "mm.dd.yyyy",
            "DD, d MM yyyy",
            "D dd M yyyy",
            "oo/yyyy",
            "J",
            "'Day' dd 'of' mm, yyyy",
            "dd/mm/yyyy ",
            " dd/mm/yyyy",
            "yyyy-oo",
            "yyyyoo",
        ];
        for pattern in patterns.map(Pattern::new) {
            for y in [-12345, -2000, -1, 1, 2015, 2016, 9999, 12345, MAX_YEAR] {
                for m in 1..=13 {
                    for d in [1, 5, 15, 30] {
                        let Ok(original) = EthiopianDate::new(y, m, d) else {
                            continue;
                        };
                        let text = pattern.format(&original);
                        assert_eq!(
                            pattern.parse(&text),
                            Ok(original),
                            "{text:?} with {pattern}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_pattern_display() {
        let pattern = Pattern::from("dd/mm/yyyy");
        assert_eq!(pattern.to_string(), "dd/mm/yyyy");
        assert_eq!(pattern.as_str(), "dd/mm/yyyy");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("dd/m yyyy"),
            vec![
                Token::Day { padded: true },
                Token::Literal("/".to_owned()),
                Token::Month { padded: false },
                Token::Literal(" ".to_owned()),
                Token::Year,
            ]
        );
        // a short run of 'y' is literal
        assert_eq!(tokenize("yy"), vec![Token::Literal("yy".to_owned())]);
        assert_eq!(tokenize("'dd'"), vec![Token::Literal("dd".to_owned())]);
    }
}
