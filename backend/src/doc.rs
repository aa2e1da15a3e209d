//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every employee, department, and health endpoint along
//! with the schema wrappers from [`crate::inbound::http::schemas`]. The
//! document backs Swagger UI at `/docs` (when enabled) and the `openapi-dump`
//! binary.

use utoipa::OpenApi;

use crate::inbound::http::departments::DepartmentRequest;
use crate::inbound::http::employees::EmployeeRequest;
use crate::inbound::http::schemas::{DepartmentSchema, EmployeeSchema, ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee management API",
        description = "CRUD over employees and departments backed by a document store."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::departments::create_department,
        crate::inbound::http::departments::list_departments,
        crate::inbound::http::departments::get_department,
        crate::inbound::http::departments::update_department,
        crate::inbound::http::departments::delete_department,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeSchema,
        DepartmentSchema,
        EmployeeRequest,
        DepartmentRequest,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "departments", description = "Department records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
