//! Employee model and related types.
//!
//! This module defines the Employee struct for registered staff and the
//! NewEmployee payload used when registering them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a registered employee.
///
/// Employees are immutable once created: the registry only ever adds and
/// deletes them. The id doubles as the attendance log's foreign key, so it is
/// validated for uniqueness at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Base monthly salary.
    pub salary: Decimal,
    /// When the employee was registered.
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a new employee.
///
/// The creation timestamp is stamped by the store, not supplied by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Base monthly salary. Defaults to zero when omitted.
    #[serde(default)]
    pub salary: Decimal,
}

impl NewEmployee {
    /// Validates the payload and builds an [`Employee`].
    ///
    /// Both id and name are trimmed; a blank id or name is rejected with
    /// [`EngineError::MissingField`]. Uniqueness of the id is the store's
    /// responsibility, since it requires a view of existing employees.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::NewEmployee;
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let new = NewEmployee {
    ///     id: "  emp_001  ".to_string(),
    ///     name: "Asha Rao".to_string(),
    ///     salary: Decimal::new(30_000, 0),
    /// };
    /// let employee = new.into_employee(Utc::now()).unwrap();
    /// assert_eq!(employee.id, "emp_001");
    /// ```
    pub fn into_employee(self, created_at: DateTime<Utc>) -> EngineResult<Employee> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(EngineError::MissingField {
                field: "Employee ID".to_string(),
            });
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(EngineError::MissingField {
                field: "Employee Name".to_string(),
            });
        }

        Ok(Employee {
            id: id.to_string(),
            name: name.to_string(),
            salary: self.salary,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee(id: &str, name: &str) -> NewEmployee {
        NewEmployee {
            id: id.to_string(),
            name: name.to_string(),
            salary: Decimal::new(30_000, 0),
        }
    }

    #[test]
    fn test_into_employee_trims_id_and_name() {
        let employee = new_employee("  emp_001 ", "  Asha Rao ")
            .into_employee(Utc::now())
            .unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Asha Rao");
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let result = new_employee("   ", "Asha Rao").into_employee(Utc::now());
        match result.unwrap_err() {
            EngineError::MissingField { field } => assert_eq!(field, "Employee ID"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = new_employee("emp_001", "").into_employee(Utc::now());
        match result.unwrap_err() {
            EngineError::MissingField { field } => assert_eq!(field, "Employee Name"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_defaults_to_zero_when_omitted() {
        let json = r#"{"id": "emp_001", "name": "Asha Rao"}"#;
        let new: NewEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(new.salary, Decimal::ZERO);
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = new_employee("emp_001", "Asha Rao")
            .into_employee(Utc::now())
            .unwrap();
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
