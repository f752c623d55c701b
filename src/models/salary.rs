//! Derived salary breakdown for one employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The salary breakdown derived from an employee's attendance history.
///
/// Never persisted: it is cheap to recompute on demand from the base salary
/// and the attendance record set, and always returned whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryDetails {
    /// The employee's base monthly salary.
    pub base_salary: Decimal,
    /// Base salary divided by the fixed 30-day month.
    pub daily_salary: Decimal,
    /// Count of absence-marked records in the evaluated set.
    pub total_leaves: u32,
    /// Absences beyond the paid-leave allowance (Loss of Pay).
    pub lop_days: u32,
    /// LOP days multiplied by the daily salary.
    pub deduction_amount: Decimal,
    /// Base salary minus the deduction, floored at zero.
    pub payable_salary: Decimal,
}
