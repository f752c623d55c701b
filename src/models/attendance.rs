//! Attendance record model and partial-update payload.
//!
//! Attendance flags use a string convention inherited from the export
//! surface: `"Yes"` when set, `""` when not. Downstream consumers (the
//! spreadsheet export in particular) read these strings verbatim, so the
//! convention is an external contract rather than an implementation detail.

use serde::{Deserialize, Serialize};

/// The string value of a set attendance flag. Unset flags are `""`.
pub const FLAG_SET: &str = "Yes";

/// A single attendance log entry for one employee on one day.
///
/// The `sno` display sequence is assigned at marking time from the existing
/// log (`max + 1`); the storage `id` is assigned by the store on insert.
/// The two are distinct: deleting records leaves gaps in both, and `sno`
/// never reuses a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Storage-assigned identifier, absent until the record is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Display sequence number, one greater than the log's previous maximum.
    pub sno: u64,
    /// Id of the employee this record belongs to.
    pub employee_id: String,
    /// Name of the employee at marking time (denormalized snapshot).
    pub employee_name: String,
    /// `"Yes"` when the employee was recorded present, else `""`.
    pub present: String,
    /// `"Yes"` when the employee was recorded absent, else `""`.
    pub absent: String,
    /// `"Yes"` when the employee was recorded late, else `""`.
    ///
    /// The marking rule never sets this flag; it exists in the schema and is
    /// counted by analytics, and can only arrive via a partial update.
    #[serde(default)]
    pub late: String,
    /// `DD-MM-YYYY HH:MM` marking time, populated only for present records.
    pub time: String,
    /// `DD-MM-YYYY` marking date, always populated.
    pub date: String,
}

impl AttendanceRecord {
    /// Returns true if this record marks the employee present.
    pub fn is_present(&self) -> bool {
        self.present == FLAG_SET
    }

    /// Returns true if this record marks the employee absent.
    pub fn is_absent(&self) -> bool {
        self.absent == FLAG_SET
    }

    /// Returns true if this record marks the employee late.
    pub fn is_late(&self) -> bool {
        self.late == FLAG_SET
    }

    /// Applies a partial update, preserving the storage id.
    pub fn apply(&self, update: AttendanceUpdate) -> AttendanceRecord {
        AttendanceRecord {
            id: self.id,
            sno: update.sno.unwrap_or(self.sno),
            employee_id: update.employee_id.unwrap_or_else(|| self.employee_id.clone()),
            employee_name: update
                .employee_name
                .unwrap_or_else(|| self.employee_name.clone()),
            present: update.present.unwrap_or_else(|| self.present.clone()),
            absent: update.absent.unwrap_or_else(|| self.absent.clone()),
            late: update.late.unwrap_or_else(|| self.late.clone()),
            time: update.time.unwrap_or_else(|| self.time.clone()),
            date: update.date.unwrap_or_else(|| self.date.clone()),
        }
    }
}

/// A partial update to an existing attendance record.
///
/// Fields left as `None` keep their stored value. The storage id cannot be
/// changed through this path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    /// New display sequence number, if changing.
    pub sno: Option<u64>,
    /// New employee id, if changing.
    pub employee_id: Option<String>,
    /// New employee name, if changing.
    pub employee_name: Option<String>,
    /// New present flag, if changing.
    pub present: Option<String>,
    /// New absent flag, if changing.
    pub absent: Option<String>,
    /// New late flag, if changing.
    pub late: Option<String>,
    /// New marking time, if changing.
    pub time: Option<String>,
    /// New marking date, if changing.
    pub date: Option<String>,
}
