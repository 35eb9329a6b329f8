//! Calculation logic for the Attendance Grid Engine.
//!
//! This module contains the calendar rules (month bounds, Saturday ordinals,
//! weekly holidays), validation of raw attendance and leave records, the
//! monthly attendance grid calculator, and salary proration by payable days.

mod calendar;
mod monthly_grid;
mod record_validation;
mod salary_proration;

pub use calendar::{HolidayRule, days_in_month, first_day_of_month, is_holiday, saturday_ordinal};
pub use monthly_grid::{compute_monthly_grid, compute_monthly_grid_with_rule};
pub use record_validation::{
    ValidatedRecords, validate_attendance_records, validate_leave_intervals,
};
pub use salary_proration::{SALARY_DECIMAL_PLACES, prorate_salary};
