/// Number of lettered periods in a year (`A` through `Z`)
pub const PERIODS_PER_YEAR: u8 = 26;

/// Days in every lettered period
pub const DAYS_PER_PERIOD: u8 = 14;

/// Days covered by the lettered periods (26 * 14)
pub const GRID_DAYS: u16 = 364;

/// First day of a period
pub const MIN_DAY: u8 = 1;

/// Last day of a period
pub const MAX_DAY: u8 = DAYS_PER_PERIOD;

/// Largest value a two-digit century or year field can hold
pub const MAX_TWO_DIGIT: u8 = 99;

/// Largest calendar year expressible as `CCYY`
pub const MAX_CALENDAR_YEAR: i32 = 9999;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Letter of the first period
pub const FIRST_PERIOD: char = 'A';
/// Letter of the last period
pub const LAST_PERIOD: char = 'Z';
/// Marker for the trailing days beyond the lettered grid
pub const LEAP_PERIOD: char = '+';

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
