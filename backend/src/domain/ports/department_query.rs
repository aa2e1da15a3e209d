//! Driving port for department reads.

use async_trait::async_trait;

use crate::domain::{Department, Error};

/// Domain use-case port for reading departments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentQuery: Send + Sync {
    /// Return every department in storage order.
    async fn list_departments(&self) -> Result<Vec<Department>, Error>;

    /// Return one department by identifier.
    async fn get_department(&self, id: &str) -> Result<Department, Error>;
}
