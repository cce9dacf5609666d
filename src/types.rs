use crate::ComponentError;
use crate::consts::{
    CENTURY_CYCLE, FIRST_PERIOD, GREGORIAN_CYCLE, LEAP_PERIOD, LEAP_YEAR_CYCLE, MAX_DAY,
    MAX_TWO_DIGIT, PERIODS_PER_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

/// A century value in the range `0..=MAX_TWO_DIGIT` (0..=99)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:02}", "_0")]
#[serde(try_from = "u8", into = "u8")]
pub struct Century(u8);

impl Century {
    /// Creates a new Century, validating that it fits in two digits
    ///
    /// # Errors
    /// Returns `ComponentError::InvalidCentury` if the value is > `MAX_TWO_DIGIT`.
    pub const fn new(value: u8) -> Result<Self, ComponentError> {
        if value > MAX_TWO_DIGIT {
            return Err(ComponentError::InvalidCentury(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Century {
    type Error = ComponentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Century> for u8 {
    fn from(century: Century) -> Self {
        century.0
    }
}

/// A year within its century, in the range `0..=MAX_TWO_DIGIT` (0..=99)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:02}", "_0")]
#[serde(try_from = "u8", into = "u8")]
pub struct YearOfCentury(u8);

impl YearOfCentury {
    /// Creates a new `YearOfCentury`, validating that it fits in two digits
    ///
    /// # Errors
    /// Returns `ComponentError::InvalidYear` if the value is > `MAX_TWO_DIGIT`.
    pub const fn new(value: u8) -> Result<Self, ComponentError> {
        if value > MAX_TWO_DIGIT {
            return Err(ComponentError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for YearOfCentury {
    type Error = ComponentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<YearOfCentury> for u8 {
    fn from(year: YearOfCentury) -> Self {
        year.0
    }
}

/// A desamber month: one of the 26 lettered periods `A..=Z`, or the
/// leap-period marker `+` covering the days past the 364-day grid.
///
/// Stored as the uppercase ASCII code of its letter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", "self.as_char()")]
#[serde(try_from = "char", into = "char")]
pub struct Month(u8);

impl Month {
    /// The trailing leap-period marker `+`
    pub const LEAP: Self = Self(LEAP_PERIOD as u8);

    /// Creates a Month from its code. Letters are accepted in either case.
    ///
    /// # Errors
    /// Returns `ComponentError::InvalidMonth` unless the code is a letter or `+`.
    pub const fn new(code: char) -> Result<Self, ComponentError> {
        let upper = code.to_ascii_uppercase();
        if upper.is_ascii_uppercase() || upper == LEAP_PERIOD {
            Ok(Self(upper as u8))
        } else {
            Err(ComponentError::InvalidMonth(code))
        }
    }

    /// Creates the lettered period at a zero-based index (0 is `A`, 25 is `Z`)
    ///
    /// # Errors
    /// Returns `ComponentError::InvalidPeriodIndex` if the index is >= `PERIODS_PER_YEAR`.
    pub const fn from_period_index(index: u8) -> Result<Self, ComponentError> {
        if index >= PERIODS_PER_YEAR {
            return Err(ComponentError::InvalidPeriodIndex(index));
        }
        Ok(Self(FIRST_PERIOD as u8 + index))
    }

    /// Zero-based index of a lettered period, `None` for the leap period
    pub const fn period_index(self) -> Option<u8> {
        if self.is_leap_period() {
            None
        } else {
            Some(self.0 - FIRST_PERIOD as u8)
        }
    }

    pub const fn is_leap_period(self) -> bool {
        self.0 == LEAP_PERIOD as u8
    }

    /// The month's code as written in the textual encoding
    #[inline]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl TryFrom<char> for Month {
    type Error = ComponentError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for char {
    fn from(month: Month) -> Self {
        month.as_char()
    }
}

/// A day within a period, guaranteed to be in the range `MIN_DAY..=MAX_DAY` (1..=14)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:02}", "_0.get()")]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's within a 14-day period
    ///
    /// # Errors
    /// Returns `ComponentError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, ComponentError> {
        if value > MAX_DAY {
            return Err(ComponentError::InvalidDay(value));
        }
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ComponentError::InvalidDay(value))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ComponentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MIN_DAY;

    #[test]
    fn test_century_new_valid() {
        assert!(Century::new(0).is_ok());
        assert!(Century::new(20).is_ok());
        assert!(Century::new(99).is_ok());
    }

    #[test]
    fn test_century_new_invalid_too_large() {
        let result = Century::new(100);
        assert!(matches!(result, Err(ComponentError::InvalidCentury(100))));
    }

    #[test]
    fn test_century_display_is_zero_padded() {
        assert_eq!(Century::new(20).unwrap().to_string(), "20");
        assert_eq!(Century::new(5).unwrap().to_string(), "05");
        assert_eq!(Century::new(0).unwrap().to_string(), "00");
    }

    #[test]
    fn test_century_try_from_u8() {
        let century: Century = 19.try_into().unwrap();
        assert_eq!(century.get(), 19);

        let result: Result<Century, _> = 255.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_of_century_bounds() {
        assert_eq!(YearOfCentury::new(0).unwrap().get(), 0);
        assert_eq!(YearOfCentury::new(99).unwrap().get(), 99);
        assert!(matches!(
            YearOfCentury::new(100),
            Err(ComponentError::InvalidYear(100))
        ));
    }

    #[test]
    fn test_year_of_century_display_is_zero_padded() {
        assert_eq!(YearOfCentury::new(8).unwrap().to_string(), "08");
        assert_eq!(YearOfCentury::new(18).unwrap().to_string(), "18");
    }

    #[test]
    fn test_year_of_century_serde() {
        let year = YearOfCentury::new(18).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "18");

        let parsed: YearOfCentury = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<YearOfCentury, _> = serde_json::from_str("100");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new_accepts_every_letter() {
        for c in 'A'..='Z' {
            let month = Month::new(c).unwrap();
            assert_eq!(month.as_char(), c);
            assert!(!month.is_leap_period());
        }
    }

    #[test]
    fn test_month_new_normalizes_case() {
        assert_eq!(Month::new('n').unwrap(), Month::new('N').unwrap());
        assert_eq!(Month::new('n').unwrap().as_char(), 'N');
    }

    #[test]
    fn test_month_display() {
        assert_eq!(Month::new('a').unwrap().to_string(), "A");
        assert_eq!(Month::from_period_index(25).unwrap().to_string(), "Z");
        assert_eq!(Month::LEAP.to_string(), "+");
    }

    #[test]
    fn test_month_leap_marker() {
        let month = Month::new('+').unwrap();
        assert_eq!(month, Month::LEAP);
        assert!(month.is_leap_period());
        assert_eq!(month.period_index(), None);
        assert_eq!(month.to_string(), "+");
    }

    #[test]
    fn test_month_new_invalid() {
        for c in ['0', '9', '-', ' ', 'é', '*'] {
            assert!(
                matches!(Month::new(c), Err(ComponentError::InvalidMonth(got)) if got == c),
                "Month code {c:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_month_period_index() {
        assert_eq!(Month::from_period_index(0).unwrap().as_char(), 'A');
        assert_eq!(Month::from_period_index(13).unwrap().as_char(), 'N');
        assert_eq!(Month::from_period_index(25).unwrap().as_char(), 'Z');
        assert!(matches!(
            Month::from_period_index(26),
            Err(ComponentError::InvalidPeriodIndex(26))
        ));

        for index in 0..PERIODS_PER_YEAR {
            let month = Month::from_period_index(index).unwrap();
            assert_eq!(month.period_index(), Some(index));
        }
    }

    #[test]
    fn test_month_ordering() {
        let a = Month::new('A').unwrap();
        let z = Month::new('Z').unwrap();
        assert!(a < z);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new('N').unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, r#""N""#);

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let leap: Month = serde_json::from_str(r#""+""#).unwrap();
        assert_eq!(leap, Month::LEAP);

        let result: Result<Month, _> = serde_json::from_str(r#""7""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        for d in MIN_DAY..=MAX_DAY {
            assert!(Day::new(d).is_ok(), "Day {d} should be valid");
        }
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(Day::new(0), Err(ComponentError::InvalidDay(0))));
        assert!(matches!(Day::new(15), Err(ComponentError::InvalidDay(15))));
        assert!(matches!(Day::new(255), Err(ComponentError::InvalidDay(255))));
    }

    #[test]
    fn test_day_display_is_zero_padded() {
        assert_eq!(Day::new(1).unwrap().to_string(), "01");
        assert_eq!(Day::new(14).unwrap().to_string(), "14");
    }

    #[test]
    fn test_day_into_u8() {
        let day = Day::new(7).unwrap();
        let value: u8 = day.into();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(7).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "7");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);

        let result: Result<Day, _> = serde_json::from_str("15");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2016,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2018,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero is divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }
}
