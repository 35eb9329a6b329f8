//! Salary proration by payable days.
//!
//! The payroll update flow pays a monthly salary in proportion to the
//! payable days of the month's attendance grid.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::MonthlyAttendanceGrid;

/// Number of decimal places in a prorated amount.
pub const SALARY_DECIMAL_PLACES: u32 = 2;

/// Prorates a monthly salary by the grid's payable days.
///
/// Computes `monthly_salary * total_payable / days_in_month`, rounded to
/// two decimal places with midpoints away from zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSalary`] if `monthly_salary` is negative.
///
/// # Example
///
/// ```
/// use attendance_grid_engine::calculation::{compute_monthly_grid, prorate_salary};
/// use attendance_grid_engine::models::LeaveInterval;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let leave = vec![LeaveInterval::new(
///     NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 11).unwrap(),
///     "Approved",
/// )];
/// let grid = compute_monthly_grid(2025, 6, &[], &leave).unwrap();
///
/// // 3 payable days out of 30
/// let pay = prorate_salary(Decimal::from_str("30000.00").unwrap(), &grid).unwrap();
/// assert_eq!(pay, Decimal::from_str("3000.00").unwrap());
/// ```
pub fn prorate_salary(
    monthly_salary: Decimal,
    grid: &MonthlyAttendanceGrid,
) -> EngineResult<Decimal> {
    if monthly_salary < Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            amount: monthly_salary,
            message: "must not be negative".to_string(),
        });
    }

    let days = grid.days_in_month();
    if days == 0 {
        return Ok(Decimal::ZERO);
    }

    let prorated = monthly_salary
        .checked_mul(Decimal::from(grid.total_payable))
        .and_then(|amount| amount.checked_div(Decimal::from(days)))
        .ok_or_else(|| EngineError::InvalidSalary {
            amount: monthly_salary,
            message: "amount too large to prorate".to_string(),
        })?;

    Ok(prorated.round_dp_with_strategy(
        SALARY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    ))
}
