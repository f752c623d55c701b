//! Error types for the Attendance and Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine.

use thiserror::Error;

/// The main error type for the Attendance and Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required employee field was blank or missing.
    #[error("{field} is required")]
    MissingField {
        /// The human-readable name of the missing field.
        field: String,
    },

    /// An employee with the same id already exists.
    #[error("Employee ID already exists: {id}")]
    DuplicateEmployee {
        /// The id that collided with an existing employee.
        id: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No attendance record exists with the given storage id.
    #[error("Attendance record not found: {id}")]
    RecordNotFound {
        /// The storage id that was looked up.
        id: u64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The remote sync backend rejected or failed a write.
    ///
    /// The synced store logs this and carries on; it never aborts the
    /// authoritative local write.
    #[error("Remote sync failed: {message}")]
    SyncFailed {
        /// A description of the sync failure.
        message: String,
    },

    /// The attendance log could not be serialized for export.
    #[error("Export failed: {message}")]
    ExportFailed {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_displays_field_name() {
        let error = EngineError::MissingField {
            field: "Employee ID".to_string(),
        };
        assert_eq!(error.to_string(), "Employee ID is required");
    }

    #[test]
    fn test_duplicate_employee_displays_id() {
        let error = EngineError::DuplicateEmployee {
            id: "emp_001".to_string(),
        };
        assert_eq!(error.to_string(), "Employee ID already exists: emp_001");
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "ghost".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: ghost");
    }

    #[test]
    fn test_record_not_found_displays_id() {
        let error = EngineError::RecordNotFound { id: 42 };
        assert_eq!(error.to_string(), "Attendance record not found: 42");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_sync_failed_displays_message() {
        let error = EngineError::SyncFailed {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Remote sync failed: connection refused");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "emp_404".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
