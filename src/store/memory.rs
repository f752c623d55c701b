//! Authoritative in-process record store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tokio::sync::RwLock;

use crate::calculation::{decide_mark, next_sno};
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceUpdate, Employee, NewEmployee};

use super::AttendanceStore;

struct Inner {
    employees: HashMap<String, Employee>,
    attendance: Vec<AttendanceRecord>,
    next_record_id: u64,
}

/// In-memory implementation of [`AttendanceStore`].
///
/// Holds all state behind one `RwLock`, so every write path runs as a
/// transactional read-then-write: `mark_attendance` reads the current
/// maximum sequence number and inserts under the same write guard, which
/// serializes concurrent markers.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates an empty store. Record ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                employees: HashMap::new(),
                attendance: Vec::new(),
                next_record_id: 1,
            }),
        }
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn add_employee(&self, new: NewEmployee) -> EngineResult<Employee> {
        let employee = new.into_employee(Utc::now())?;

        let mut inner = self.inner.write().await;
        if inner.employees.contains_key(&employee.id) {
            return Err(EngineError::DuplicateEmployee {
                id: employee.id.clone(),
            });
        }

        inner
            .employees
            .insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    async fn employees(&self) -> Vec<Employee> {
        let inner = self.inner.read().await;
        let mut employees: Vec<Employee> = inner.employees.values().cloned().collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        employees
    }

    async fn employee(&self, id: &str) -> Option<Employee> {
        let inner = self.inner.read().await;
        inner.employees.get(id).cloned()
    }

    async fn delete_employee(&self, id: &str) {
        let mut inner = self.inner.write().await;
        inner.employees.remove(id);
    }

    async fn mark_attendance(
        &self,
        employee_id: &str,
        requested_present: bool,
        now: NaiveDateTime,
    ) -> EngineResult<AttendanceRecord> {
        let mut inner = self.inner.write().await;

        let employee =
            inner
                .employees
                .get(employee_id)
                .ok_or_else(|| EngineError::EmployeeNotFound {
                    id: employee_id.to_string(),
                })?;

        let sno = next_sno(&inner.attendance);
        let mut record = decide_mark(employee, requested_present, now, sno);

        record.id = Some(inner.next_record_id);
        inner.next_record_id += 1;
        inner.attendance.push(record.clone());

        Ok(record)
    }

    async fn attendance(&self) -> Vec<AttendanceRecord> {
        let inner = self.inner.read().await;
        inner.attendance.clone()
    }

    async fn attendance_for_employee(&self, employee_id: &str) -> Vec<AttendanceRecord> {
        let inner = self.inner.read().await;
        inner
            .attendance
            .iter()
            .filter(|record| record.employee_id == employee_id)
            .cloned()
            .collect()
    }

    async fn attendance_for_date(&self, date: &str) -> Vec<AttendanceRecord> {
        let inner = self.inner.read().await;
        inner
            .attendance
            .iter()
            .filter(|record| record.date == date)
            .cloned()
            .collect()
    }

    async fn update_attendance(
        &self,
        id: u64,
        update: AttendanceUpdate,
    ) -> EngineResult<AttendanceRecord> {
        let mut inner = self.inner.write().await;

        let slot = inner
            .attendance
            .iter_mut()
            .find(|record| record.id == Some(id))
            .ok_or(EngineError::RecordNotFound { id })?;

        let updated = slot.apply(update);
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete_attendance(&self, id: u64) {
        let mut inner = self.inner.write().await;
        inner.attendance.retain(|record| record.id != Some(id));
    }
}
