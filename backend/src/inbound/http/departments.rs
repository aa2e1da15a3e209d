//! Department API handlers.
//!
//! ```text
//! POST   /api/Department        {"name":"Finance"}
//! GET    /api/Department
//! GET    /api/Department/{id}
//! PUT    /api/Department/{id}   {"name":"Accounts"}
//! DELETE /api/Department/{id}
//! ```
//!
//! The entity segment is case-insensitive: `/api/department` works too.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Department, DepartmentDetails, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DepartmentSchema, ErrorSchema};
use crate::inbound::http::routing::{RecordPath, entity_scope};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldErrors, FieldName};

const NAME: FieldName = FieldName::new("name");

/// Body accepted by create and update.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    #[schema(example = "Finance")]
    pub name: Option<String>,
}

impl DepartmentRequest {
    fn into_details(self) -> Result<DepartmentDetails, Error> {
        let mut errors = FieldErrors::new();
        let name = errors.require(NAME, self.name);
        errors.finish()?;
        Ok(DepartmentDetails::new(name.unwrap_or_default()))
    }
}

/// Register the department routes on a service config.
///
/// The `Department` segment matches in any letter case.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        entity_scope("Department")
            .service(create_department)
            .service(list_departments)
            .service(get_department)
            .service(update_department)
            .service(delete_department),
    );
}

/// Create a department with a unique name.
#[utoipa::path(
    post,
    path = "/api/Department",
    request_body = DepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = DepartmentSchema,
            headers(("Location" = String, description = "URI of the new department"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Name already in use", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "createDepartment"
)]
#[post("")]
pub async fn create_department(
    state: web::Data<HttpState>,
    payload: web::Json<DepartmentRequest>,
) -> ApiResult<HttpResponse> {
    let details = payload.into_inner().into_details()?;
    let department = state.departments.create_department(details).await?;
    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("/api/Department/{}", department.id()),
        ))
        .json(department))
}

/// List every department in storage order.
#[utoipa::path(
    get,
    path = "/api/Department",
    responses(
        (status = 200, description = "Departments", body = [DepartmentSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "listDepartments"
)]
#[get("")]
pub async fn list_departments(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Department>>> {
    Ok(web::Json(state.departments_query.list_departments().await?))
}

/// Fetch one department.
#[utoipa::path(
    get,
    path = "/api/Department/{id}",
    responses(
        (status = 200, description = "Department", body = DepartmentSchema),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "getDepartment"
)]
#[get("/{id}")]
pub async fn get_department(
    state: web::Data<HttpState>,
    path: web::Path<RecordPath>,
) -> ApiResult<web::Json<Department>> {
    Ok(web::Json(state.departments_query.get_department(&path.id).await?))
}

/// Rename a department.
#[utoipa::path(
    put,
    path = "/api/Department/{id}",
    request_body = DepartmentRequest,
    responses(
        (status = 200, description = "Renamed department", body = DepartmentSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 409, description = "Name already in use", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "updateDepartment"
)]
#[put("/{id}")]
pub async fn update_department(
    state: web::Data<HttpState>,
    path: web::Path<RecordPath>,
    payload: web::Json<DepartmentRequest>,
) -> ApiResult<web::Json<Department>> {
    let details = payload.into_inner().into_details()?;
    Ok(web::Json(
        state.departments.update_department(&path.id, details).await?,
    ))
}

/// Delete a department.
#[utoipa::path(
    delete,
    path = "/api/Department/{id}",
    responses(
        (status = 204, description = "Department deleted"),
        (status = 400, description = "Blank identifier", body = ErrorSchema),
        (status = 404, description = "Unknown identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "deleteDepartment"
)]
#[delete("/{id}")]
pub async fn delete_department(
    state: web::Data<HttpState>,
    path: web::Path<RecordPath>,
) -> ApiResult<HttpResponse> {
    let RecordPath { id } = path.into_inner();
    if state.departments.delete_department(&id).await? {
        return Ok(HttpResponse::NoContent().finish());
    }
    debug!(department_id = %id, "delete matched nothing");
    Err(Error::not_found(format!(
        "Department with ID {id} not found."
    )))
}

#[cfg(test)]
#[path = "departments_tests.rs"]
mod tests;
