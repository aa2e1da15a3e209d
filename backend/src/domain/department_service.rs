//! Department domain service.
//!
//! Owns the department rules: a non-blank name that is unique ignoring case,
//! and existence checks before any mutation.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    DepartmentCommand, DepartmentQuery, DepartmentRepository, DepartmentRepositoryError,
};
use crate::domain::{Department, DepartmentDetails, Error, RecordId};

const ID_REQUIRED: &str = "Department ID is required.";
const NAME_REQUIRED: &str = "Department name is required.";
const NAME_TAKEN: &str = "Department with this name already exists.";

fn map_repository_error(error: DepartmentRepositoryError) -> Error {
    match error {
        DepartmentRepositoryError::Connection { message } => {
            Error::internal(format!("department repository unavailable: {message}"))
        }
        DepartmentRepositoryError::Query { message } => {
            Error::internal(format!("department repository error: {message}"))
        }
    }
}

fn parse_id(raw: &str) -> Result<RecordId, Error> {
    RecordId::new(raw).map_err(|_| {
        Error::invalid_request(ID_REQUIRED).with_details(json!({
            "field": "id",
            "code": "blank_id",
        }))
    })
}

fn not_found(id: &RecordId) -> Error {
    Error::not_found(format!("Department with ID {id} not found."))
}

fn validate_details(details: &DepartmentDetails) -> Result<(), Error> {
    if details.name.trim().is_empty() {
        return Err(Error::invalid_request(NAME_REQUIRED).with_details(json!({
            "field": "name",
            "code": "blank_name",
        })));
    }
    Ok(())
}

/// Department service implementing the department driving ports.
#[derive(Clone)]
pub struct DepartmentService<R> {
    department_repo: Arc<R>,
}

impl<R> DepartmentService<R> {
    /// Create a new service over the department repository.
    pub fn new(department_repo: Arc<R>) -> Self {
        Self { department_repo }
    }
}

impl<R> DepartmentService<R>
where
    R: DepartmentRepository,
{
    async fn find_existing(&self, id: &RecordId) -> Result<Department, Error> {
        self.department_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    async fn ensure_name_available(
        &self,
        details: &DepartmentDetails,
        owner: Option<&RecordId>,
    ) -> Result<(), Error> {
        let departments = self
            .department_repo
            .list()
            .await
            .map_err(map_repository_error)?;
        let taken = departments
            .iter()
            .filter(|department| Some(department.id()) != owner)
            .any(|department| department.details().shares_name_with(details));
        if taken {
            return Err(Error::conflict(NAME_TAKEN).with_details(json!({
                "field": "name",
                "code": "duplicate_name",
            })));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> DepartmentCommand for DepartmentService<R>
where
    R: DepartmentRepository,
{
    async fn create_department(&self, details: DepartmentDetails) -> Result<Department, Error> {
        validate_details(&details)?;
        self.ensure_name_available(&details, None).await?;

        let department = self
            .department_repo
            .create(&details)
            .await
            .map_err(map_repository_error)?;
        info!(department_id = %department.id(), "department created");
        Ok(department)
    }

    async fn update_department(
        &self,
        id: &str,
        details: DepartmentDetails,
    ) -> Result<Department, Error> {
        let id = parse_id(id)?;
        let existing = self.find_existing(&id).await?;
        validate_details(&details)?;
        self.ensure_name_available(&details, Some(&id)).await?;

        let updated = existing.with_details(details);
        if !self
            .department_repo
            .update(&updated)
            .await
            .map_err(map_repository_error)?
        {
            return Err(not_found(&id));
        }
        info!(department_id = %id, "department updated");
        Ok(updated)
    }

    async fn delete_department(&self, id: &str) -> Result<bool, Error> {
        let id = parse_id(id)?;
        self.find_existing(&id).await?;

        let removed = self
            .department_repo
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        debug!(department_id = %id, removed, "department delete attempted");
        Ok(removed)
    }
}

#[async_trait]
impl<R> DepartmentQuery for DepartmentService<R>
where
    R: DepartmentRepository,
{
    async fn list_departments(&self) -> Result<Vec<Department>, Error> {
        self.department_repo
            .list()
            .await
            .map_err(map_repository_error)
    }

    async fn get_department(&self, id: &str) -> Result<Department, Error> {
        let id = parse_id(id)?;
        self.find_existing(&id).await
    }
}

#[cfg(test)]
#[path = "department_service_tests.rs"]
mod tests;
