//! Driving port for employee mutations.
//!
//! Inbound adapters call this port with raw identifiers; the implementing
//! service owns identifier validation and every business rule.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDetails, Error};

/// Domain use-case port for creating, updating, and deleting employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Validate and persist a new employee.
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, Error>;

    /// Overwrite the mutable fields of an existing employee.
    async fn update_employee(&self, id: &str, details: EmployeeDetails)
    -> Result<Employee, Error>;

    /// Delete an existing employee, returning whether storage removed it.
    async fn delete_employee(&self, id: &str) -> Result<bool, Error>;
}
