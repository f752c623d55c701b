//! Display sequence assignment for attendance records.

use crate::models::AttendanceRecord;

/// Returns the display sequence number for the next attendance record.
///
/// The next number is one greater than the maximum `sno` across the existing
/// log, or `1` when the log is empty. Assignment is gap-tolerant: deleted
/// records leave holes that are never refilled, so the sequence is derived
/// from the maximum rather than the record count.
///
/// The caller must pass a consistent snapshot of the full log; the store
/// serializes read-max-then-insert so concurrent markers cannot observe the
/// same maximum.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::next_sno;
///
/// assert_eq!(next_sno(&[]), 1);
/// ```
pub fn next_sno(records: &[AttendanceRecord]) -> u64 {
    records
        .iter()
        .map(|record| record.sno)
        .max()
        .map_or(1, |max| max + 1)
}
