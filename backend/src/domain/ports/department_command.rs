//! Driving port for department mutations.

use async_trait::async_trait;

use crate::domain::{Department, DepartmentDetails, Error};

/// Domain use-case port for creating, updating, and deleting departments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentCommand: Send + Sync {
    /// Validate and persist a new department.
    async fn create_department(&self, details: DepartmentDetails) -> Result<Department, Error>;

    /// Rename an existing department.
    async fn update_department(
        &self,
        id: &str,
        details: DepartmentDetails,
    ) -> Result<Department, Error>;

    /// Delete an existing department, returning whether storage removed it.
    async fn delete_department(&self, id: &str) -> Result<bool, Error>;
}
