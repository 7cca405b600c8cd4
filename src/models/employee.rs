//! Employee master data and organisational lookups.
//!
//! This module defines the [`Employee`] struct along with the
//! [`Department`] and [`Team`] lookup types read for reporting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The user account linked to an employee, used for naming and crediting.
///
/// Payslips are owned by this user and training expenses reference its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Unique identifier of the user account.
    pub id: String,
    /// Display name of the user.
    pub name: String,
}

/// Represents an employee subject to payroll processing.
///
/// The three rate fields are optional in the master data; a missing value
/// is treated as zero everywhere in the computation, never as an error.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, UserRef};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     user: UserRef {
///         id: "user_001".to_string(),
///         name: "Jane Doe".to_string(),
///     },
///     department_id: "dept_eng".to_string(),
///     team_id: None,
///     salary: Some(Decimal::new(500000, 2)),
///     overtime_rate: None,
///     daily_rate: None,
/// };
/// assert_eq!(employee.base_salary(), Decimal::new(500000, 2));
/// assert_eq!(employee.overtime_rate_or_zero(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The linked user account.
    pub user: UserRef,
    /// The department this employee belongs to.
    pub department_id: String,
    /// The team this employee belongs to, if any.
    pub team_id: Option<String>,
    /// Base monthly salary.
    pub salary: Option<Decimal>,
    /// Overtime rate in currency per hour.
    pub overtime_rate: Option<Decimal>,
    /// Daily rate in currency per day, used for absence and unpaid-leave
    /// deductions.
    pub daily_rate: Option<Decimal>,
}

impl Employee {
    /// The base monthly salary, or zero when not set.
    pub fn base_salary(&self) -> Decimal {
        self.salary.unwrap_or(Decimal::ZERO)
    }

    /// The overtime rate per hour, or zero when not set.
    pub fn overtime_rate_or_zero(&self) -> Decimal {
        self.overtime_rate.unwrap_or(Decimal::ZERO)
    }

    /// The daily rate, or zero when not set.
    pub fn daily_rate_or_zero(&self) -> Decimal {
        self.daily_rate.unwrap_or(Decimal::ZERO)
    }
}

/// A department lookup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier of the department.
    pub id: String,
    /// Display name of the department.
    pub name: String,
}

/// A team lookup row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique identifier of the team.
    pub id: String,
    /// Display name of the team.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            user: UserRef {
                id: "user_001".to_string(),
                name: "Jane Doe".to_string(),
            },
            department_id: "dept_eng".to_string(),
            team_id: Some("team_platform".to_string()),
            salary: Some(Decimal::new(500000, 2)),
            overtime_rate: Some(Decimal::new(2000, 2)),
            daily_rate: Some(Decimal::new(15000, 2)),
        }
    }

    #[test]
    fn test_base_salary_uses_value_when_present() {
        let employee = create_test_employee();
        assert_eq!(employee.base_salary(), Decimal::new(500000, 2));
    }

    #[test]
    fn test_missing_amounts_default_to_zero() {
        let mut employee = create_test_employee();
        employee.salary = None;
        employee.overtime_rate = None;
        employee.daily_rate = None;

        assert_eq!(employee.base_salary(), Decimal::ZERO);
        assert_eq!(employee.overtime_rate_or_zero(), Decimal::ZERO);
        assert_eq!(employee.daily_rate_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_002",
            "user": {"id": "user_002", "name": "John Smith"},
            "department_id": "dept_ops",
            "team_id": null,
            "salary": "4200.00",
            "overtime_rate": null,
            "daily_rate": "140.00"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_002");
        assert_eq!(employee.user.name, "John Smith");
        assert_eq!(employee.team_id, None);
        assert_eq!(employee.salary, Some(Decimal::new(420000, 2)));
        assert_eq!(employee.overtime_rate, None);
        assert_eq!(employee.daily_rate, Some(Decimal::new(14000, 2)));
    }

    #[test]
    fn test_serialize_employee_round_trips() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
