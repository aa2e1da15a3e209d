//! Driven port for employee persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDetails, RecordId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
    }
}

/// Port adapting employee records onto a storage collection.
///
/// Adapters hold no business rules. Absent records are reported as `None` or
/// `false`, never as errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Persist a new employee; storage assigns the identifier.
    async fn create(&self, details: &EmployeeDetails) -> Result<Employee, EmployeeRepositoryError>;

    /// Return every stored employee in storage order.
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch an employee by identifier.
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Rewrite the stored record with the same identifier.
    ///
    /// Returns `false` when no record matched.
    async fn update(&self, employee: &Employee) -> Result<bool, EmployeeRepositoryError>;

    /// Remove an employee, returning whether a record was deleted.
    async fn delete(&self, id: &RecordId) -> Result<bool, EmployeeRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn connection_error_formats_message() {
        let err = EmployeeRepositoryError::connection("store offline");
        assert_eq!(
            err.to_string(),
            "employee repository connection failed: store offline"
        );
    }

    #[rstest]
    fn query_error_formats_message() {
        let err = EmployeeRepositoryError::query("broken document");
        assert!(err.to_string().contains("broken document"));
    }
}
