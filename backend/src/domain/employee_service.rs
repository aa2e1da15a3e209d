//! Employee domain service.
//!
//! Sole authority for employee business rules: field presence, email
//! uniqueness, and existence checks before mutation. Implements the
//! [`EmployeeCommand`] and [`EmployeeQuery`] driving ports over an
//! [`EmployeeRepository`].
//!
//! The uniqueness check reads the whole collection before writing, without
//! isolation. Two concurrent creates with the same email can both pass it.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    EmployeeCommand, EmployeeQuery, EmployeeRepository, EmployeeRepositoryError,
};
use crate::domain::{Employee, EmployeeDetails, Error, RecordId};

const ID_REQUIRED: &str = "Employee ID is required.";
const NAME_REQUIRED: &str = "Employee name is required.";
const EMAIL_REQUIRED: &str = "Employee email is required.";
const EMAIL_TAKEN: &str = "Employee with this email already exists.";

fn map_repository_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::internal(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
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
    Error::not_found(format!("Employee with ID {id} not found."))
}

fn validate_details(details: &EmployeeDetails) -> Result<(), Error> {
    if details.full_name.trim().is_empty() {
        return Err(Error::invalid_request(NAME_REQUIRED).with_details(json!({
            "field": "fullName",
            "code": "blank_full_name",
        })));
    }
    if details.email.trim().is_empty() {
        return Err(Error::invalid_request(EMAIL_REQUIRED).with_details(json!({
            "field": "email",
            "code": "blank_email",
        })));
    }
    Ok(())
}

/// Employee service implementing the employee driving ports.
#[derive(Clone)]
pub struct EmployeeService<R> {
    employee_repo: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a new service over the employee repository.
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self { employee_repo }
    }
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn find_existing(&self, id: &RecordId) -> Result<Employee, Error> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }

    /// Reject `details` when another employee already uses its email.
    ///
    /// `owner` names the record being updated so it does not clash with
    /// itself.
    async fn ensure_email_available(
        &self,
        details: &EmployeeDetails,
        owner: Option<&RecordId>,
    ) -> Result<(), Error> {
        let employees = self
            .employee_repo
            .list()
            .await
            .map_err(map_repository_error)?;
        let taken = employees
            .iter()
            .filter(|employee| Some(employee.id()) != owner)
            .any(|employee| employee.details().shares_email_with(details));
        if taken {
            return Err(Error::conflict(EMAIL_TAKEN).with_details(json!({
                "field": "email",
                "code": "duplicate_email",
            })));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, Error> {
        validate_details(&details)?;
        self.ensure_email_available(&details, None).await?;

        let employee = self
            .employee_repo
            .create(&details)
            .await
            .map_err(map_repository_error)?;
        info!(employee_id = %employee.id(), "employee created");
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: &str,
        details: EmployeeDetails,
    ) -> Result<Employee, Error> {
        let id = parse_id(id)?;
        let existing = self.find_existing(&id).await?;
        validate_details(&details)?;
        self.ensure_email_available(&details, Some(&id)).await?;

        let updated = existing.with_details(details);
        let matched = self
            .employee_repo
            .update(&updated)
            .await
            .map_err(map_repository_error)?;
        if !matched {
            return Err(not_found(&id));
        }
        info!(employee_id = %id, "employee updated");
        Ok(updated)
    }

    async fn delete_employee(&self, id: &str) -> Result<bool, Error> {
        let id = parse_id(id)?;
        self.find_existing(&id).await?;

        let removed = self
            .employee_repo
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        debug!(employee_id = %id, removed, "employee delete attempted");
        Ok(removed)
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        self.employee_repo
            .list()
            .await
            .map_err(map_repository_error)
    }

    async fn get_employee(&self, id: &str) -> Result<Employee, Error> {
        let id = parse_id(id)?;
        self.find_existing(&id).await
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
