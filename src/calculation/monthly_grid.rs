//! Monthly attendance grid calculation.
//!
//! This module turns one employee's attendance records and leave intervals
//! into a day-by-day payable grid for a calendar month.
//!
//! Each day is classified by the first rule that matches:
//!
//! 1. Sunday, or a holiday Saturday under the [`HolidayRule`] → `Holiday`
//! 2. Covered by an approved leave interval → `Leave`
//! 3. Has an attendance record with status `Present`/`P` → `Present`
//! 4. Otherwise → `Absent`

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{DayClassification, DayRecord, DayStatus, LeaveInterval, MonthlyAttendanceGrid};

use super::calendar::{HolidayRule, days_in_month, first_day_of_month, is_holiday};

/// Computes the monthly grid using the default holiday rule
/// (Sundays plus the 2nd and 4th Saturdays).
///
/// # Arguments
///
/// * `year` - The calendar year
/// * `month` - The month, 1-12
/// * `attendance_records` - Attendance records in any order; may contain duplicates
/// * `leave_intervals` - Leave intervals in any order; may overlap
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`](crate::error::EngineError::InvalidMonth)
/// if `month` is outside 1-12, and
/// [`EngineError::InvalidYear`](crate::error::EngineError::InvalidYear) for a
/// year the calendar cannot represent. No partial grid is produced.
///
/// # Example
///
/// ```
/// use attendance_grid_engine::calculation::compute_monthly_grid;
/// use attendance_grid_engine::models::{DayRecord, DayStatus, LeaveInterval};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
///
/// let attendance = vec![DayRecord::new(date(2), "Present")];
/// let leave = vec![LeaveInterval::new(date(9), date(11), "Approved")];
///
/// let grid = compute_monthly_grid(2025, 6, &attendance, &leave).unwrap();
/// assert_eq!(grid.days.len(), 30);
/// assert_eq!(grid.status_on(date(1)), Some(DayStatus::Holiday)); // Sunday
/// assert_eq!(grid.status_on(date(2)), Some(DayStatus::Present));
/// assert_eq!(grid.status_on(date(10)), Some(DayStatus::Leave));
/// assert_eq!(grid.total_payable, 4);
/// ```
pub fn compute_monthly_grid(
    year: i32,
    month: u32,
    attendance_records: &[DayRecord],
    leave_intervals: &[LeaveInterval],
) -> EngineResult<MonthlyAttendanceGrid> {
    compute_monthly_grid_with_rule(
        year,
        month,
        attendance_records,
        leave_intervals,
        HolidayRule::default(),
    )
}

/// Computes the monthly grid with an explicit holiday rule.
///
/// See [`compute_monthly_grid`] for the arguments and errors.
pub fn compute_monthly_grid_with_rule(
    year: i32,
    month: u32,
    attendance_records: &[DayRecord],
    leave_intervals: &[LeaveInterval],
    rule: HolidayRule,
) -> EngineResult<MonthlyAttendanceGrid> {
    let first = first_day_of_month(year, month)?;
    let day_count = days_in_month(year, month)?;

    // Any Present/P record wins when a date has several records
    let present_dates: HashSet<NaiveDate> = attendance_records
        .iter()
        .filter(|r| r.is_present())
        .map(|r| r.date)
        .collect();

    let approved_leave: Vec<&LeaveInterval> =
        leave_intervals.iter().filter(|l| l.is_approved()).collect();

    let days: Vec<DayClassification> = first
        .iter_days()
        .take(day_count as usize)
        .zip(1..=day_count)
        .map(|(date, day_index)| DayClassification {
            date,
            day_index,
            status: classify_day(date, rule, &approved_leave, &present_dates),
        })
        .collect();

    let grid = MonthlyAttendanceGrid::new(year, month, days);

    debug!(
        year,
        month,
        holiday_rule = %rule,
        attendance_records = attendance_records.len(),
        approved_leave = approved_leave.len(),
        total_payable = grid.total_payable,
        "Computed monthly attendance grid"
    );

    Ok(grid)
}

/// Classifies a single date. Holiday is checked first and short-circuits.
fn classify_day(
    date: NaiveDate,
    rule: HolidayRule,
    approved_leave: &[&LeaveInterval],
    present_dates: &HashSet<NaiveDate>,
) -> DayStatus {
    if is_holiday(date, rule) {
        DayStatus::Holiday
    } else if approved_leave.iter().any(|l| l.covers(date)) {
        DayStatus::Leave
    } else if present_dates.contains(&date) {
        DayStatus::Present
    } else {
        DayStatus::Absent
    }
}
