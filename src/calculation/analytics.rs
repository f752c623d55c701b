//! Attendance analytics aggregation.
//!
//! Whole-log counters for the dashboard cards and a per-day breakdown for
//! the trend chart. Both are derived on demand from the raw record set.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

use super::mark_decision::MARK_DATE_FORMAT;

/// Whole-log attendance counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    /// Count of present-marked records.
    pub present: u32,
    /// Count of absent-marked records.
    pub absent: u32,
    /// Count of late-marked records.
    pub late: u32,
}

/// Attendance counters for a single marking date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    /// The marking date in `DD-MM-YYYY` form.
    pub date: String,
    /// Count of present-marked records on this date.
    pub present: u32,
    /// Count of absent-marked records on this date.
    pub absent: u32,
    /// Count of late-marked records on this date.
    pub late: u32,
}

/// Counts present, absent, and late marks across the whole record set.
///
/// The counters are independent: a record carrying both a present and a late
/// flag increments both.
pub fn attendance_totals(records: &[AttendanceRecord]) -> AttendanceTotals {
    let mut totals = AttendanceTotals {
        present: 0,
        absent: 0,
        late: 0,
    };

    for record in records {
        if record.is_present() {
            totals.present += 1;
        }
        if record.is_absent() {
            totals.absent += 1;
        }
        if record.is_late() {
            totals.late += 1;
        }
    }

    totals
}

/// Groups the record set by marking date and counts flags per day.
///
/// Days are sorted chronologically by parsing the `DD-MM-YYYY` date string;
/// records whose date fails to parse are grouped as usual but sort last.
pub fn daily_breakdown(records: &[AttendanceRecord]) -> Vec<DailyAttendance> {
    let mut by_date: HashMap<&str, DailyAttendance> = HashMap::new();

    for record in records {
        let day = by_date
            .entry(record.date.as_str())
            .or_insert_with(|| DailyAttendance {
                date: record.date.clone(),
                present: 0,
                absent: 0,
                late: 0,
            });

        if record.is_present() {
            day.present += 1;
        }
        if record.is_absent() {
            day.absent += 1;
        }
        if record.is_late() {
            day.late += 1;
        }
    }

    let mut days: Vec<DailyAttendance> = by_date.into_values().collect();
    days.sort_by_key(|day| {
        NaiveDate::parse_from_str(&day.date, MARK_DATE_FORMAT)
            .map_or((true, NaiveDate::MAX), |date| (false, date))
    });
    days
}
