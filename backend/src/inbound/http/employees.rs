//! Employee API handlers.
//!
//! ```text
//! POST   /api/Employee        {"fullName":"Ada Lovelace","email":"ada@example.com","salary":52000}
//! GET    /api/Employee
//! GET    /api/Employee/{id}
//! PUT    /api/Employee/{id}   {"fullName":"Ada King","email":"ada@example.com","salary":60000}
//! DELETE /api/Employee/{id}
//! ```
//!
//! The entity segment is case-insensitive: `/api/employee` works too.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Employee, EmployeeDetails, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmployeeSchema, ErrorSchema};
use crate::inbound::http::routing::{RecordPath, entity_scope};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldErrors, FieldName};

const FULL_NAME: FieldName = FieldName::new("fullName");
const EMAIL: FieldName = FieldName::new("email");

/// Body accepted by create and update.
///
/// Any `id` in the body is ignored; the path or storage decides identity.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Defaults to zero when omitted.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>, example = 52000.0)]
    pub salary: Option<Decimal>,
}

impl EmployeeRequest {
    /// Run the shape check and convert into domain details.
    fn into_details(self) -> Result<EmployeeDetails, Error> {
        let mut errors = FieldErrors::new();
        let full_name = errors.require(FULL_NAME, self.full_name);
        errors.check_email(EMAIL, self.email.as_deref());
        let email = errors.require(EMAIL, self.email);
        errors.finish()?;
        Ok(EmployeeDetails::new(
            full_name.unwrap_or_default(),
            email.unwrap_or_default(),
            self.salary.unwrap_or_default(),
        ))
    }
}

fn not_found(id: &str) -> Error {
    Error::not_found(format!("Employee with ID {id} not found."))
}

/// Register the employee routes on a service config.
///
/// The `Employee` segment matches in any letter case.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        entity_scope("Employee")
            .service(create_employee)
            .service(list_employees)
            .service(get_employee)
            .service(update_employee)
            .service(delete_employee),
    );
}

/// Create an employee with a unique email.
#[utoipa::path(
    post,
    path = "/api/Employee",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeSchema,
            headers(("Location" = String, description = "URI of the new employee"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already in use", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let details = payload.into_inner().into_details()?;
    let employee = state.employees.create_employee(details).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/Employee/{}", employee.id())))
        .json(employee))
}

/// List every employee in storage order.
#[utoipa::path(
    get,
    path = "/api/Employee",
    responses(
        (status = 200, description = "Employees", body = [EmployeeSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees_query.list_employees().await?;
    Ok(web::Json(employees))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/api/Employee/{id}",
    responses(
        (status = 200, description = "Employee", body = EmployeeSchema),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<RecordPath>,
) -> ApiResult<web::Json<Employee>> {
    let employee = state.employees_query.get_employee(&path.id).await?;
    Ok(web::Json(employee))
}

/// Overwrite an employee's name, email, and salary.
#[utoipa::path(
    put,
    path = "/api/Employee/{id}",
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Updated employee", body = EmployeeSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 409, description = "Email already in use", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<RecordPath>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<web::Json<Employee>> {
    let details = payload.into_inner().into_details()?;
    let employee = state.employees.update_employee(&path.id, details).await?;
    Ok(web::Json(employee))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/Employee/{id}",
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
#[delete("/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<RecordPath>,
) -> ApiResult<HttpResponse> {
    let RecordPath { id } = path.into_inner();
    if state.employees.delete_employee(&id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        debug!(employee_id = %id, "delete matched nothing");
        Err(not_found(&id))
    }
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
