//! Conversion from Gregorian calendar dates into desamber dates.
//!
//! Day-of-year 1..=364 is binned proportionally onto the 26 lettered periods;
//! day-of-year 365 and 366 fall on the leap period `+`. The day within a
//! period is taken modulo 14 independently of the binning, so the two are
//! not guaranteed to agree near bin edges (day-of-year 211 lands on `O01`).

use chrono::{Datelike, Local, NaiveDate};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_PER_PERIOD, GRID_DAYS,
    MAX_CALENDAR_YEAR, PERIODS_PER_YEAR,
};
use crate::types::is_leap_year;
use crate::{Century, ComponentError, Day, DesamberDate, Month, YearOfCentury};

/// Error type for calendar date conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The calendar year has no two-digit century and year.
    #[error("Year {0} out of range (must be 0-{max})", max = MAX_CALENDAR_YEAR)]
    YearOutOfRange(i32),

    /// The day of year does not exist in the given year.
    #[error("Invalid day of year {ordinal} for year {year}")]
    InvalidOrdinal { year: i32, ordinal: u32 },

    /// A computed component failed validation.
    #[error(transparent)]
    Component(#[from] ComponentError),
}

impl DesamberDate {
    /// Converts any calendar date exposing a year and a day of year; fails only
    /// for years outside 0..=9999, which the two-digit century cannot hold.
    ///
    /// The result has all four fields set and both display flags off.
    ///
    /// # Errors
    /// Returns `ConvertError::YearOutOfRange` for years outside 0..=9999.
    pub fn from_date<D: Datelike>(date: &D) -> Result<Self, ConvertError> {
        Self::from_ordinal(date.year(), date.ordinal())
    }

    /// Converts a calendar year and 1-based day of year.
    ///
    /// # Errors
    /// Returns `ConvertError::YearOutOfRange` for years outside 0..=9999 and
    /// `ConvertError::InvalidOrdinal` if the day does not exist in that year.
    pub fn from_ordinal(year: i32, ordinal: u32) -> Result<Self, ConvertError> {
        let full_year = u16::try_from(year)
            .ok()
            .filter(|y| i32::from(*y) <= MAX_CALENDAR_YEAR)
            .ok_or(ConvertError::YearOutOfRange(year))?;

        let year_length = if is_leap_year(full_year) {
            DAYS_IN_LEAP_YEAR
        } else {
            DAYS_IN_COMMON_YEAR
        };
        let day_of_year = u16::try_from(ordinal)
            .ok()
            .filter(|d| (1..=year_length).contains(d))
            .ok_or(ConvertError::InvalidOrdinal { year, ordinal })?;

        let (century, year_of_century) = split_year(full_year)?;
        let date = Self::new(
            century,
            year_of_century,
            month_for_ordinal(day_of_year)?,
            day_for_ordinal(day_of_year)?,
        );

        #[cfg(feature = "log")]
        log::trace!("{full_year}-{day_of_year:03} converted to {date:?}");

        Ok(date)
    }

    /// Converts the system clock's current local date.
    ///
    /// # Errors
    /// Returns `ConvertError::YearOutOfRange` if the clock reads a year past 9999.
    pub fn today() -> Result<Self, ConvertError> {
        Self::from_date(&Local::now().date_naive())
    }
}

impl TryFrom<NaiveDate> for DesamberDate {
    type Error = ConvertError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(&value)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn split_year(full_year: u16) -> Result<(Century, YearOfCentury), ComponentError> {
    let century = Century::new((full_year / CENTURY_CYCLE) as u8)?;
    let year = YearOfCentury::new((full_year % CENTURY_CYCLE) as u8)?;
    Ok((century, year))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn month_for_ordinal(day_of_year: u16) -> Result<Month, ComponentError> {
    if day_of_year > GRID_DAYS {
        return Ok(Month::LEAP);
    }
    let index = (f64::from(day_of_year - 1) / f64::from(GRID_DAYS)) * f64::from(PERIODS_PER_YEAR);
    Month::from_period_index(index.floor() as u8)
}

#[allow(clippy::cast_possible_truncation)]
fn day_for_ordinal(day_of_year: u16) -> Result<Day, ComponentError> {
    match (day_of_year % u16::from(DAYS_PER_PERIOD)) as u8 {
        0 => Day::new(DAYS_PER_PERIOD),
        day => Day::new(day),
    }
}
