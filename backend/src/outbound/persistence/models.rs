//! Stored document shapes for employees and departments.
//!
//! These are internal to the persistence layer. Field names follow the
//! collection layout (`_id` plus PascalCase fields), which differs from the
//! camelCase JSON served over HTTP.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Department, DepartmentDetails, Employee, EmployeeDetails, RecordId, RecordIdValidationError,
};

/// Document stored in the employees collection.
///
/// `Salary` is written as a decimal string so cents survive storage; numeric
/// values written by other tools are still accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct EmployeeDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub salary: Decimal,
}

impl From<&EmployeeDetails> for EmployeeDocument {
    fn from(details: &EmployeeDetails) -> Self {
        Self {
            id: None,
            full_name: details.full_name.clone(),
            email: details.email.clone(),
            salary: details.salary,
        }
    }
}

impl EmployeeDocument {
    /// Convert into a domain record, requiring a stored identifier.
    pub fn into_employee(self) -> Result<Employee, RecordIdValidationError> {
        let id = RecordId::new(self.id.unwrap_or_default())?;
        Ok(Employee::new(
            id,
            EmployeeDetails::new(self.full_name, self.email, self.salary),
        ))
    }
}

/// Document stored in the departments collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DepartmentDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl From<&DepartmentDetails> for DepartmentDocument {
    fn from(details: &DepartmentDetails) -> Self {
        Self {
            id: None,
            name: details.name.clone(),
        }
    }
}

impl DepartmentDocument {
    /// Convert into a domain record, requiring a stored identifier.
    pub fn into_department(self) -> Result<Department, RecordIdValidationError> {
        let id = RecordId::new(self.id.unwrap_or_default())?;
        Ok(Department::new(id, DepartmentDetails::new(self.name)))
    }
}
