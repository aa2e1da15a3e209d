//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{
    MockDepartmentCommand, MockDepartmentQuery, MockEmployeeCommand, MockEmployeeQuery,
};
use crate::domain::{DepartmentService, EmployeeService};
use crate::inbound::http::error::json_config;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{departments, employees};
use crate::outbound::persistence::{
    DocumentDepartmentRepository, DocumentEmployeeRepository, InMemoryCollection,
};

/// State wired to real services over empty in-memory collections.
pub fn in_memory_state() -> HttpState {
    let employees = Arc::new(EmployeeService::new(Arc::new(
        DocumentEmployeeRepository::new(Arc::new(InMemoryCollection::new())),
    )));
    let departments = Arc::new(DepartmentService::new(Arc::new(
        DocumentDepartmentRepository::new(Arc::new(InMemoryCollection::new())),
    )));
    HttpState::new(employees.clone(), employees, departments.clone(), departments)
}

/// Port doubles; tests set expectations on the ones they exercise.
#[derive(Default)]
pub struct MockPorts {
    pub employees: MockEmployeeCommand,
    pub employees_query: MockEmployeeQuery,
    pub departments: MockDepartmentCommand,
    pub departments_query: MockDepartmentQuery,
}

impl From<MockPorts> for HttpState {
    fn from(ports: MockPorts) -> Self {
        HttpState::new(
            Arc::new(ports.employees),
            Arc::new(ports.employees_query),
            Arc::new(ports.departments),
            Arc::new(ports.departments_query),
        )
    }
}

/// Application exposing the `/api` routes over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(
            web::scope("/api")
                .configure(employees::configure)
                .configure(departments::configure),
        )
}
