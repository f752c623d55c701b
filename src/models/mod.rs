//! Core data models for the Attendance and Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod salary;

pub use attendance::{AttendanceRecord, AttendanceUpdate, FLAG_SET};
pub use employee::{Employee, NewEmployee};
pub use salary::SalaryDetails;
