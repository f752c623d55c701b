//! Loss-of-Pay salary calculation.
//!
//! Derives per-employee payable salary from raw attendance records. The
//! first [`PAID_LEAVE_ALLOWANCE`] absences in the evaluated set are paid
//! leave; every absence beyond that is a Loss-of-Pay day deducted at the
//! daily rate.

use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, SalaryDetails};

/// Number of absences per evaluated record set that are paid leave.
pub const PAID_LEAVE_ALLOWANCE: u32 = 3;

/// Fixed month-length divisor for the daily rate.
///
/// Deliberately not calendar-aware: the source payroll policy divides by 30
/// regardless of the actual month, and changing it would alter payroll
/// output.
pub const DAYS_PER_MONTH: u32 = 30;

/// Calculates the salary breakdown for one employee.
///
/// The record set must already be scoped to the employee (and, if desired,
/// to a period); this function performs no filtering beyond counting
/// absence-marked records.
///
/// # Behavior
///
/// - `daily_salary = base_salary / 30`
/// - `total_leaves` counts records whose absent flag is set
/// - `lop_days = max(0, total_leaves - 3)`
/// - `deduction_amount = lop_days * daily_salary`
/// - `payable_salary = max(0, base_salary - deduction_amount)`
///
/// Pure and deterministic: identical inputs always produce identical output.
/// Degenerate numeric input (a negative base salary) is not validated and
/// yields a degenerate but non-crashing result.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::calculate_salary;
/// use rust_decimal::Decimal;
///
/// let details = calculate_salary(Decimal::new(30_000, 0), &[]);
/// assert_eq!(details.daily_salary, Decimal::new(1_000, 0));
/// assert_eq!(details.lop_days, 0);
/// assert_eq!(details.payable_salary, Decimal::new(30_000, 0));
/// ```
pub fn calculate_salary(base_salary: Decimal, records: &[AttendanceRecord]) -> SalaryDetails {
    let daily_salary = base_salary / Decimal::from(DAYS_PER_MONTH);

    let total_leaves = records.iter().filter(|record| record.is_absent()).count() as u32;
    let lop_days = total_leaves.saturating_sub(PAID_LEAVE_ALLOWANCE);

    let deduction_amount = Decimal::from(lop_days) * daily_salary;
    let payable_salary = (base_salary - deduction_amount).max(Decimal::ZERO);

    SalaryDetails {
        base_salary,
        daily_salary,
        total_leaves,
        lop_days,
        deduction_amount,
        payable_salary,
    }
}
