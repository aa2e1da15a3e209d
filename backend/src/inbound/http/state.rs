//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DepartmentCommand, DepartmentQuery, EmployeeCommand, EmployeeQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeCommand>,
    pub employees_query: Arc<dyn EmployeeQuery>,
    pub departments: Arc<dyn DepartmentCommand>,
    pub departments_query: Arc<dyn DepartmentQuery>,
}

impl HttpState {
    /// Construct state from the employee and department ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employee_management::domain::{DepartmentService, EmployeeService};
    /// use employee_management::inbound::http::state::HttpState;
    /// use employee_management::outbound::persistence::{
    ///     DocumentDepartmentRepository, DocumentEmployeeRepository, InMemoryCollection,
    /// };
    ///
    /// let employees = Arc::new(EmployeeService::new(Arc::new(
    ///     DocumentEmployeeRepository::new(Arc::new(InMemoryCollection::new())),
    /// )));
    /// let departments = Arc::new(DepartmentService::new(Arc::new(
    ///     DocumentDepartmentRepository::new(Arc::new(InMemoryCollection::new())),
    /// )));
    /// let state = HttpState::new(
    ///     employees.clone(),
    ///     employees,
    ///     departments.clone(),
    ///     departments,
    /// );
    /// let _query = state.employees_query.clone();
    /// ```
    pub fn new(
        employees: Arc<dyn EmployeeCommand>,
        employees_query: Arc<dyn EmployeeQuery>,
        departments: Arc<dyn DepartmentCommand>,
        departments_query: Arc<dyn DepartmentQuery>,
    ) -> Self {
        Self {
            employees,
            employees_query,
            departments,
            departments_query,
        }
    }
}
