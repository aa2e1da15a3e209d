//! Driven port for department persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Department, DepartmentDetails, RecordId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by department repository adapters.
    pub enum DepartmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "department repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "department repository query failed: {message}",
    }
}

/// Port adapting department records onto a storage collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Persist a new department; storage assigns the identifier.
    async fn create(
        &self,
        details: &DepartmentDetails,
    ) -> Result<Department, DepartmentRepositoryError>;

    /// Return every stored department in storage order.
    async fn list(&self) -> Result<Vec<Department>, DepartmentRepositoryError>;

    /// Fetch a department by identifier.
    async fn find_by_id(
        &self,
        id: &RecordId,
    ) -> Result<Option<Department>, DepartmentRepositoryError>;

    /// Rewrite the stored record with the same identifier.
    ///
    /// Returns `false` when no record matched.
    async fn update(&self, department: &Department) -> Result<bool, DepartmentRepositoryError>;

    /// Remove a department, returning whether a record was deleted.
    async fn delete(&self, id: &RecordId) -> Result<bool, DepartmentRepositoryError>;
}
