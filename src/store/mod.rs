//! Storage collaborators for the Attendance and Payroll Engine.
//!
//! The engine's pure core never performs I/O; everything stateful sits
//! behind the [`AttendanceStore`] trait. [`MemoryStore`] is the
//! authoritative in-process implementation, and [`SyncedStore`] decorates
//! any store with a best-effort fan-out to a [`RemoteSink`] backend.

mod memory;
mod sync;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, AttendanceUpdate, Employee, NewEmployee};

pub use memory::MemoryStore;
pub use sync::{HttpSink, RemoteSink, SyncedStore};

/// The record store the engine runs against.
///
/// Writes that derive state from existing records (`mark_attendance`'s
/// sequence assignment in particular) must execute as a transactional
/// read-then-write, so concurrent callers never observe the same snapshot.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Registers a new employee.
    ///
    /// Trims and validates the payload, rejects duplicate ids, and stamps
    /// the creation time. Nothing is persisted on rejection.
    async fn add_employee(&self, new: NewEmployee) -> EngineResult<Employee>;

    /// Returns all employees, sorted by name.
    async fn employees(&self) -> Vec<Employee>;

    /// Looks up one employee by id.
    async fn employee(&self, id: &str) -> Option<Employee>;

    /// Deletes an employee by id. Deleting an unknown id is a no-op.
    ///
    /// The employee's attendance records are left in place; they carry a
    /// denormalized name snapshot and stay readable.
    async fn delete_employee(&self, id: &str);

    /// Marks attendance for an employee at the given wall-clock moment.
    ///
    /// Resolves the employee, assigns the next display sequence number from
    /// a consistent snapshot of the log, applies the cutoff decision, and
    /// persists the record. Returns the record with its storage id merged
    /// in, or [`EngineError::EmployeeNotFound`](crate::error::EngineError)
    /// without any side effect.
    async fn mark_attendance(
        &self,
        employee_id: &str,
        requested_present: bool,
        now: NaiveDateTime,
    ) -> EngineResult<AttendanceRecord>;

    /// Returns the full attendance log in insertion order.
    async fn attendance(&self) -> Vec<AttendanceRecord>;

    /// Returns the attendance records for one employee.
    async fn attendance_for_employee(&self, employee_id: &str) -> Vec<AttendanceRecord>;

    /// Returns the attendance records for one `DD-MM-YYYY` date.
    async fn attendance_for_date(&self, date: &str) -> Vec<AttendanceRecord>;

    /// Applies a partial update to a record, preserving its storage id.
    async fn update_attendance(
        &self,
        id: u64,
        update: AttendanceUpdate,
    ) -> EngineResult<AttendanceRecord>;

    /// Deletes a record by storage id. Deleting an unknown id is a no-op.
    async fn delete_attendance(&self, id: u64);
}
