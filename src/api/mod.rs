//! HTTP API module for the Attendance and Payroll Engine.
//!
//! This module provides the REST endpoints for managing employees, marking
//! attendance, reading analytics, and exporting the attendance log.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddEmployeeRequest, MarkAttendanceRequest, UpdateAttendanceRequest};
pub use response::{AnalyticsResponse, ApiError};
pub use state::AppState;
