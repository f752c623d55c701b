//! Best-effort remote sync.
//!
//! [`SyncedStore`] decorates an authoritative store with a fan-out to a
//! secondary [`RemoteSink`]. The authoritative write decides the outcome:
//! sink failures are logged and swallowed, never surfaced to callers, and a
//! sink is only invoked after the authoritative write succeeded.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceUpdate, Employee, NewEmployee};

use super::AttendanceStore;

/// A secondary backend that mirrors the attendance data.
#[async_trait]
pub trait RemoteSink: Send + Sync {
    /// Mirrors a newly registered employee.
    async fn persist_employee(&self, employee: &Employee) -> EngineResult<()>;

    /// Mirrors an employee deletion.
    async fn remove_employee(&self, id: &str) -> EngineResult<()>;

    /// Mirrors a newly persisted attendance record.
    async fn persist_attendance(&self, record: &AttendanceRecord) -> EngineResult<()>;

    /// Mirrors an attendance record update.
    async fn persist_attendance_update(&self, record: &AttendanceRecord) -> EngineResult<()>;

    /// Mirrors an attendance record deletion.
    async fn remove_attendance(&self, id: u64) -> EngineResult<()>;
}

/// Store decorator that fans successful writes out to a [`RemoteSink`].
pub struct SyncedStore {
    primary: Arc<dyn AttendanceStore>,
    sink: Arc<dyn RemoteSink>,
}

impl SyncedStore {
    /// Wraps an authoritative store with a secondary sink.
    pub fn new(primary: Arc<dyn AttendanceStore>, sink: Arc<dyn RemoteSink>) -> Self {
        Self { primary, sink }
    }
}

#[async_trait]
impl AttendanceStore for SyncedStore {
    async fn add_employee(&self, new: NewEmployee) -> EngineResult<Employee> {
        let employee = self.primary.add_employee(new).await?;
        if let Err(error) = self.sink.persist_employee(&employee).await {
            warn!(%error, employee_id = %employee.id, "employee sync failed; local write kept");
        }
        Ok(employee)
    }

    async fn employees(&self) -> Vec<Employee> {
        self.primary.employees().await
    }

    async fn employee(&self, id: &str) -> Option<Employee> {
        self.primary.employee(id).await
    }

    async fn delete_employee(&self, id: &str) {
        self.primary.delete_employee(id).await;
        if let Err(error) = self.sink.remove_employee(id).await {
            warn!(%error, employee_id = %id, "employee delete sync failed");
        }
    }

    async fn mark_attendance(
        &self,
        employee_id: &str,
        requested_present: bool,
        now: NaiveDateTime,
    ) -> EngineResult<AttendanceRecord> {
        let record = self
            .primary
            .mark_attendance(employee_id, requested_present, now)
            .await?;
        if let Err(error) = self.sink.persist_attendance(&record).await {
            warn!(%error, record_id = ?record.id, "attendance sync failed; local write kept");
        }
        Ok(record)
    }

    async fn attendance(&self) -> Vec<AttendanceRecord> {
        self.primary.attendance().await
    }

    async fn attendance_for_employee(&self, employee_id: &str) -> Vec<AttendanceRecord> {
        self.primary.attendance_for_employee(employee_id).await
    }

    async fn attendance_for_date(&self, date: &str) -> Vec<AttendanceRecord> {
        self.primary.attendance_for_date(date).await
    }

    async fn update_attendance(
        &self,
        id: u64,
        update: AttendanceUpdate,
    ) -> EngineResult<AttendanceRecord> {
        let record = self.primary.update_attendance(id, update).await?;
        if let Err(error) = self.sink.persist_attendance_update(&record).await {
            warn!(%error, record_id = id, "attendance update sync failed");
        }
        Ok(record)
    }

    async fn delete_attendance(&self, id: u64) {
        self.primary.delete_attendance(id).await;
        if let Err(error) = self.sink.remove_attendance(id).await {
            warn!(%error, record_id = id, "attendance delete sync failed");
        }
    }
}

/// [`RemoteSink`] that mirrors records to an HTTP backend as JSON.
pub struct HttpSink {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSink {
    /// Builds a sink for the given backend base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> EngineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::SyncFailed {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Result<reqwest::Response, reqwest::Error>) -> EngineResult<()> {
        response
            .and_then(|r| r.error_for_status())
            .map(|_| ())
            .map_err(|e| EngineError::SyncFailed {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl RemoteSink for HttpSink {
    async fn persist_employee(&self, employee: &Employee) -> EngineResult<()> {
        let response = self
            .client
            .post(self.url("/employees"))
            .json(employee)
            .send()
            .await;
        Self::check(response).await
    }

    async fn remove_employee(&self, id: &str) -> EngineResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/employees/{id}")))
            .send()
            .await;
        Self::check(response).await
    }

    async fn persist_attendance(&self, record: &AttendanceRecord) -> EngineResult<()> {
        let response = self
            .client
            .post(self.url("/attendance"))
            .json(record)
            .send()
            .await;
        Self::check(response).await
    }

    async fn persist_attendance_update(&self, record: &AttendanceRecord) -> EngineResult<()> {
        let id = record.id.unwrap_or_default();
        let response = self
            .client
            .put(self.url(&format!("/attendance/{id}")))
            .json(record)
            .send()
            .await;
        Self::check(response).await
    }

    async fn remove_attendance(&self, id: u64) -> EngineResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/attendance/{id}")))
            .send()
            .await;
        Self::check(response).await
    }
}
