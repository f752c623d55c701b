//! Request types for the Attendance and Payroll Engine API.
//!
//! This module defines the JSON request structures for the write endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceUpdate, NewEmployee};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Base monthly salary. Defaults to zero when omitted.
    #[serde(default)]
    pub salary: Decimal,
}

/// Request body for `POST /attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    /// Id of the employee to mark.
    pub employee_id: String,
    /// The requested presence; the noon cutoff may override it to absent.
    pub present: bool,
}

/// Request body for `PATCH /attendance/{id}`.
///
/// All fields are optional; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAttendanceRequest {
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

/// Query parameters for `GET /attendance`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceQuery {
    /// Restrict the log to one employee.
    pub employee_id: Option<String>,
    /// Restrict the log to one `DD-MM-YYYY` date.
    pub date: Option<String>,
}

impl From<AddEmployeeRequest> for NewEmployee {
    fn from(req: AddEmployeeRequest) -> Self {
        NewEmployee {
            id: req.id,
            name: req.name,
            salary: req.salary,
        }
    }
}

impl From<UpdateAttendanceRequest> for AttendanceUpdate {
    fn from(req: UpdateAttendanceRequest) -> Self {
        AttendanceUpdate {
            sno: req.sno,
            employee_id: req.employee_id,
            employee_name: req.employee_name,
            present: req.present,
            absent: req.absent,
            late: req.late,
            time: req.time,
            date: req.date,
        }
    }
}
