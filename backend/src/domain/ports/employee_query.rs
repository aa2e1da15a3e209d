//! Driving port for employee reads.

use async_trait::async_trait;

use crate::domain::{Employee, Error};

/// Domain use-case port for reading employees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Return every employee in storage order.
    async fn list_employees(&self) -> Result<Vec<Employee>, Error>;

    /// Return one employee by identifier.
    async fn get_employee(&self, id: &str) -> Result<Employee, Error>;
}
