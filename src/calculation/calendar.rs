//! Calendar rules for attendance grids.
//!
//! This module provides the month arithmetic and holiday detection the grid
//! calculator relies on: month bounds, the ordinal of a Saturday within its
//! month, and the weekly holiday rule.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Which weekend days are non-working holidays.
///
/// Every Sunday is a holiday under both rules. They differ only in which
/// Saturdays of the month are off.
///
/// # Example
///
/// ```
/// use attendance_grid_engine::calculation::HolidayRule;
///
/// let rule = HolidayRule::default();
/// assert_eq!(rule, HolidayRule::SundaysAndSecondFourthSaturdays);
/// assert!(rule.saturday_is_holiday(2));
/// assert!(!rule.saturday_is_holiday(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayRule {
    /// Sundays plus the 2nd and 4th Saturday of the month.
    #[default]
    SundaysAndSecondFourthSaturdays,
    /// Sundays plus the 4th Saturday of the month only.
    SundaysAndFourthSaturday,
}

impl HolidayRule {
    /// Returns true if the Saturday with the given 1-based ordinal is off.
    pub fn saturday_is_holiday(self, ordinal: u32) -> bool {
        match self {
            HolidayRule::SundaysAndSecondFourthSaturdays => ordinal == 2 || ordinal == 4,
            HolidayRule::SundaysAndFourthSaturday => ordinal == 4,
        }
    }
}

impl std::fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayRule::SundaysAndSecondFourthSaturdays => {
                write!(f, "sundays_and_second_fourth_saturdays")
            }
            HolidayRule::SundaysAndFourthSaturday => write!(f, "sundays_and_fourth_saturday"),
        }
    }
}

/// Returns the first day of a month after validating the month and year.
///
/// # Errors
///
/// - [`EngineError::InvalidMonth`] if `month` is outside 1-12
/// - [`EngineError::InvalidYear`] if `year` is not positive or out of calendar range
pub fn first_day_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(EngineError::InvalidMonth {
            month: i64::from(month),
        });
    }
    if year <= 0 {
        return Err(EngineError::InvalidYear { year });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidYear { year })
}

/// Returns the number of days in a month (28-31).
///
/// # Example
///
/// ```
/// use attendance_grid_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2025, 6).unwrap(), 30);
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert!(days_in_month(2025, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_day_of_month(year, month)?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or(EngineError::InvalidYear { year })?;
    Ok((next - first).num_days() as u32)
}

/// Returns the 1-based ordinal of a Saturday within its month.
///
/// Returns `None` when the date is not a Saturday.
///
/// # Example
///
/// ```
/// use attendance_grid_engine::calculation::saturday_ordinal;
/// use chrono::NaiveDate;
///
/// // June 2025: Saturdays fall on the 7th, 14th, 21st and 28th
/// assert_eq!(saturday_ordinal(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()), Some(1));
/// assert_eq!(saturday_ordinal(NaiveDate::from_ymd_opt(2025, 6, 28).unwrap()), Some(4));
/// assert_eq!(saturday_ordinal(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()), None);
/// ```
pub fn saturday_ordinal(date: NaiveDate) -> Option<u32> {
    match date.weekday() {
        Weekday::Sat => Some((date.day() - 1) / 7 + 1),
        _ => None,
    }
}

/// Determines whether a date is a weekly holiday under the given rule.
///
/// Sundays are always holidays; Saturdays depend on their ordinal within
/// the month; every other weekday is a working day.
pub fn is_holiday(date: NaiveDate, rule: HolidayRule) -> bool {
    match date.weekday() {
        Weekday::Sun => true,
        Weekday::Sat => {
            saturday_ordinal(date).is_some_and(|ordinal| rule.saturday_is_holiday(ordinal))
        }
        _ => false,
    }
}
