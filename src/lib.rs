mod consts;
mod convert;
mod prelude;
mod types;

pub use consts::*;
pub use convert::ConvertError;
pub use types::{Century, Day, Month, YearOfCentury, is_leap_year};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A date in the desamber calendar: a two-digit century and year, one of 26
/// lettered 14-day periods (or the `+` leap period), and a day within it.
///
/// Dates converted from the calendar carry every field. Parsed dates carry
/// only the fields the text contained, so an absent field is `None` rather
/// than zero.
///
/// The display flags only affect formatting; two dates with the same fields
/// compare equal whatever their flags.
#[derive(Debug, Clone, Copy)]
pub struct DesamberDate {
    century: Option<Century>,
    year: Option<YearOfCentury>,
    month: Option<Month>,
    day: Option<Day>,
    show_year: bool,
    show_century: bool,
}

/// Error type for parsing the textual encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not follow `[CCYY|YY][M][DD]`.
    #[error("String did not match format: {0:?}")]
    MalformedInput(String),

    /// A `+` day other than 01 or 02 in a leap year.
    #[error("Invalid day for leap year: {year}+{day:02}")]
    InvalidLeapDay { year: u16, day: u8 },
}

/// Error type for constructing individual date components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComponentError {
    #[error("Invalid century: {0} (must be 0-{max})", max = MAX_TWO_DIGIT)]
    InvalidCentury(u8),
    #[error("Invalid year: {0} (must be 0-{max})", max = MAX_TWO_DIGIT)]
    InvalidYear(u8),
    #[error(
        "Invalid month: {0:?} (must be {first}-{last} or {leap})",
        first = FIRST_PERIOD,
        last = LAST_PERIOD,
        leap = LEAP_PERIOD
    )]
    InvalidMonth(char),
    #[error("Invalid period index: {0} (must be below {max})", max = PERIODS_PER_YEAR)]
    InvalidPeriodIndex(u8),
    #[error("Invalid day: {0} (must be {min}-{max})", min = MIN_DAY, max = MAX_DAY)]
    InvalidDay(u8),
}

impl DesamberDate {
    /// Creates a fully populated date (components are already validated).
    /// Both display flags start off.
    pub const fn new(century: Century, year: YearOfCentury, month: Month, day: Day) -> Self {
        Self {
            century: Some(century),
            year: Some(year),
            month: Some(month),
            day: Some(day),
            show_year: false,
            show_century: false,
        }
    }

    /// Turns on the two-digit year when formatting.
    #[must_use]
    pub const fn enable_year(mut self) -> Self {
        self.show_year = true;
        self
    }

    /// Turns on the century when formatting. Also turns on the year.
    #[must_use]
    pub const fn enable_century(mut self) -> Self {
        self.show_century = true;
        self.show_year = true;
        self
    }

    pub const fn century(&self) -> Option<Century> {
        self.century
    }

    pub const fn year(&self) -> Option<YearOfCentury> {
        self.year
    }

    pub const fn month(&self) -> Option<Month> {
        self.month
    }

    pub const fn day(&self) -> Option<Day> {
        self.day
    }

    pub const fn shows_year(&self) -> bool {
        self.show_year
    }

    pub const fn shows_century(&self) -> bool {
        self.show_century
    }

    /// Returns the four-digit calendar year when both century and year are known
    pub fn full_year(&self) -> Option<u16> {
        Self::full_year_of(self.century, self.year)
    }

    /// Whether the date falls in a leap year, if the full year is known
    pub fn is_leap_year(&self) -> Option<bool> {
        self.full_year().map(is_leap_year)
    }
}

impl PartialEq for DesamberDate {
    fn eq(&self, other: &Self) -> bool {
        self.century == other.century
            && self.year == other.year
            && self.month == other.month
            && self.day == other.day
    }
}

impl Eq for DesamberDate {}

impl Hash for DesamberDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.century.hash(state);
        self.year.hash(state);
        self.month.hash(state);
        self.day.hash(state);
    }
}

impl fmt::Display for DesamberDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(century) = self.century.filter(|_| self.show_century) {
            write!(f, "{century}")?;
        }
        if let Some(year) = self.year.filter(|_| self.show_year) {
            write!(f, "{year}")?;
        }
        if let Some(month) = self.month {
            write!(f, "{month}")?;
        }
        if let Some(day) = self.day {
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl FromStr for DesamberDate {
    type Err = ParseError;

    /// Parses `[CCYY|YY][M][DD]`, case-insensitively.
    ///
    /// Only the fields present in the text are set. Both display flags start
    /// off; call `enable_year` or `enable_century` to print the year fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        let bytes = upper.as_bytes();

        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        let (prefix, rest) = bytes.split_at(digits);
        let (century, year) = Self::parse_year_block(prefix, s)?;

        let date = match rest.split_first() {
            // Nothing follows the digits: only a bare two-digit year stands alone
            None if digits == 2 => Self {
                century: None,
                year,
                month: None,
                day: None,
                show_year: false,
                show_century: false,
            },
            None => return Err(Self::malformed(s)),
            Some((&code, day_digits)) => {
                let month = Month::new(char::from(code)).map_err(|_| Self::malformed(s))?;
                let raw_day = Self::parse_day_digits(day_digits, s)?;

                if let (Some(full_year), Some(day)) =
                    (Self::full_year_of(century, year), raw_day)
                {
                    Self::check_leap_day(full_year, month, day)?;
                }
                let day = raw_day
                    .map(Day::new)
                    .transpose()
                    .map_err(|_| Self::malformed(s))?;

                Self {
                    century,
                    year,
                    month: Some(month),
                    day,
                    show_year: false,
                    show_century: false,
                }
            }
        };

        #[cfg(feature = "log")]
        log::trace!("parsed {s:?} as {date:?}");

        Ok(date)
    }
}

impl DesamberDate {
    fn malformed(s: &str) -> ParseError {
        ParseError::MalformedInput(s.to_owned())
    }

    /// Two ASCII digits as a number
    fn two_digits(pair: &[u8]) -> Option<u8> {
        match *pair {
            [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => Some((tens - b'0') * 10 + (ones - b'0')),
            _ => None,
        }
    }

    /// Splits the leading digit run into century and year. Only an empty run,
    /// `YY` or `CCYY` is accepted.
    fn parse_year_block(
        prefix: &[u8],
        s: &str,
    ) -> Result<(Option<Century>, Option<YearOfCentury>), ParseError> {
        let to_year = |pair: &[u8]| {
            Self::two_digits(pair)
                .and_then(|v| YearOfCentury::new(v).ok())
                .ok_or_else(|| Self::malformed(s))
        };

        match prefix.len() {
            0 => Ok((None, None)),
            2 => Ok((None, Some(to_year(prefix)?))),
            4 => {
                let (cc, yy) = prefix.split_at(2);
                let century = Self::two_digits(cc)
                    .and_then(|v| Century::new(v).ok())
                    .ok_or_else(|| Self::malformed(s))?;
                Ok((Some(century), Some(to_year(yy)?)))
            }
            _ => Err(Self::malformed(s)),
        }
    }

    /// Parses the text after the month: nothing, or exactly two digits.
    /// The value is range-checked later so the leap-day rule sees it first.
    fn parse_day_digits(day_digits: &[u8], s: &str) -> Result<Option<u8>, ParseError> {
        if day_digits.is_empty() {
            return Ok(None);
        }
        Self::two_digits(day_digits)
            .map(Some)
            .ok_or_else(|| Self::malformed(s))
    }

    fn full_year_of(century: Option<Century>, year: Option<YearOfCentury>) -> Option<u16> {
        match (century, year) {
            (Some(century), Some(year)) => {
                Some(u16::from(century.get()) * CENTURY_CYCLE + u16::from(year.get()))
            }
            _ => None,
        }
    }

    /// A leap year has two days past the lettered grid, so `+` only admits 01 and 02.
    /// Checked only when the full year is known.
    const fn check_leap_day(full_year: u16, month: Month, day: u8) -> Result<(), ParseError> {
        if month.is_leap_period() && is_leap_year(full_year) && !matches!(day, 1 | 2) {
            return Err(ParseError::InvalidLeapDay {
                year: full_year,
                day,
            });
        }
        Ok(())
    }
}

impl serde::Serialize for DesamberDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.enable_century().to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DesamberDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
