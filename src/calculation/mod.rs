//! Calculation logic for the Attendance and Payroll Engine.
//!
//! This module contains the pure decision and derivation functions: the
//! noon-cutoff marking decision, display sequence assignment, the
//! Loss-of-Pay salary calculation, and attendance analytics aggregation.

mod analytics;
mod mark_decision;
mod salary;
mod sequence;

pub use analytics::{AttendanceTotals, DailyAttendance, attendance_totals, daily_breakdown};
pub use mark_decision::{
    MARK_CUTOFF_HOUR, MARK_DATE_FORMAT, MARK_TIME_FORMAT, cutoff_forces_absent, decide_mark,
    format_mark_date, format_mark_time,
};
pub use salary::{DAYS_PER_MONTH, PAID_LEAVE_ALLOWANCE, calculate_salary};
pub use sequence::next_sno;
