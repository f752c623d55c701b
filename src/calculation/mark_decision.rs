//! Attendance marking decision logic.
//!
//! This module turns a mark request (employee, requested presence, current
//! wall-clock time) into the canonical attendance record to persist,
//! applying the office cutoff rule: a mark submitted at or after noon is
//! recorded as absent regardless of the requested status.

use chrono::{NaiveDateTime, Timelike};

use crate::models::{AttendanceRecord, Employee, FLAG_SET};

/// The local hour (24-hour clock) at and after which a mark is forced absent.
pub const MARK_CUTOFF_HOUR: u32 = 12;

/// Format of the `date` field on attendance records.
pub const MARK_DATE_FORMAT: &str = "%d-%m-%Y";

/// Format of the `time` field on present attendance records.
pub const MARK_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Returns true if the cutoff rule forces this marking moment to absent.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::cutoff_forces_absent;
/// use chrono::NaiveDate;
///
/// let morning = NaiveDate::from_ymd_opt(2026, 8, 5)
///     .unwrap()
///     .and_hms_opt(11, 59, 0)
///     .unwrap();
/// assert!(!cutoff_forces_absent(morning));
///
/// let noon = NaiveDate::from_ymd_opt(2026, 8, 5)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// assert!(cutoff_forces_absent(noon));
/// ```
pub fn cutoff_forces_absent(now: NaiveDateTime) -> bool {
    now.hour() >= MARK_CUTOFF_HOUR
}

/// Formats a marking moment as the record's `date` field (`DD-MM-YYYY`).
pub fn format_mark_date(now: NaiveDateTime) -> String {
    now.format(MARK_DATE_FORMAT).to_string()
}

/// Formats a marking moment as the record's `time` field (`DD-MM-YYYY HH:MM`).
pub fn format_mark_time(now: NaiveDateTime) -> String {
    now.format(MARK_TIME_FORMAT).to_string()
}

/// Produces the attendance record for a mark request.
///
/// The caller resolves the employee and supplies the next display sequence
/// number (see [`next_sno`](crate::calculation::next_sno)); this function is
/// a pure decision over its inputs and is idempotent in
/// `(employee, requested_present, now, sno)`.
///
/// # Behavior
///
/// - At or after 12:00 local time the final mark is absent regardless of
///   `requested_present`.
/// - Exactly one of `present`/`absent` is set to `"Yes"` on the returned
///   record, never both, never neither.
/// - `time` is populated only for finally-present records; `date` always.
/// - The `late` flag is never set here.
/// - The storage id is left unassigned; the store fills it on insert.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::decide_mark;
/// use attendance_engine::models::NewEmployee;
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
///
/// let employee = NewEmployee {
///     id: "emp_001".to_string(),
///     name: "Asha Rao".to_string(),
///     salary: Decimal::new(30_000, 0),
/// }
/// .into_employee(Utc::now())
/// .unwrap();
///
/// let after_noon = NaiveDate::from_ymd_opt(2026, 8, 5)
///     .unwrap()
///     .and_hms_opt(14, 30, 0)
///     .unwrap();
/// let record = decide_mark(&employee, true, after_noon, 1);
/// assert_eq!(record.absent, "Yes");
/// assert_eq!(record.time, "");
/// ```
pub fn decide_mark(
    employee: &Employee,
    requested_present: bool,
    now: NaiveDateTime,
    sno: u64,
) -> AttendanceRecord {
    let final_present = requested_present && !cutoff_forces_absent(now);

    AttendanceRecord {
        id: None,
        sno,
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        present: if final_present {
            FLAG_SET.to_string()
        } else {
            String::new()
        },
        absent: if final_present {
            String::new()
        } else {
            FLAG_SET.to_string()
        },
        late: String::new(),
        time: if final_present {
            format_mark_time(now)
        } else {
            String::new()
        },
        date: format_mark_date(now),
    }
}
