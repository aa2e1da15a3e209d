//! Composition root: builds repositories and services once at start-up.

use std::sync::Arc;

use tracing::{info, warn};

use employee_management::domain::{DepartmentService, EmployeeService};
use employee_management::inbound::http::state::HttpState;
use employee_management::outbound::persistence::{
    DocumentCollection, DocumentDepartmentRepository, DocumentEmployeeRepository,
    DocumentStoreError, InMemoryDocumentStore, MongoDocumentStore,
};

use super::ServerSettings;

/// Open the configured collections and wire the HTTP state over them.
///
/// Uses MongoDB when a connection string is configured and an in-memory
/// store otherwise.
///
/// # Errors
///
/// Returns [`DocumentStoreError`] when the connection string is invalid.
pub async fn build_http_state(settings: &ServerSettings) -> Result<HttpState, DocumentStoreError> {
    let Some(uri) = settings.connection_string() else {
        warn!(
            database = settings.database_name(),
            "no connection string configured; records are kept in memory"
        );
        let store = InMemoryDocumentStore::new(settings.database_name());
        return Ok(build_http_state_with_store(&store, settings).await);
    };

    let store = MongoDocumentStore::connect(uri, settings.database_name()).await?;
    info!(
        database = store.database_name(),
        employees = settings.employees_collection(),
        departments = settings.departments_collection(),
        "mongodb collections opened"
    );
    Ok(wire(
        store.collection(settings.employees_collection()),
        store.collection(settings.departments_collection()),
    ))
}

/// Wire the HTTP state over an existing in-memory store.
pub async fn build_http_state_with_store(
    store: &InMemoryDocumentStore,
    settings: &ServerSettings,
) -> HttpState {
    let employees_collection = store.collection(settings.employees_collection()).await;
    let departments_collection = store.collection(settings.departments_collection()).await;
    info!(
        database = store.database_name(),
        employees = settings.employees_collection(),
        departments = settings.departments_collection(),
        "in-memory collections opened"
    );
    wire(employees_collection, departments_collection)
}

fn wire(
    employees_collection: Arc<dyn DocumentCollection>,
    departments_collection: Arc<dyn DocumentCollection>,
) -> HttpState {
    let employees = Arc::new(EmployeeService::new(Arc::new(
        DocumentEmployeeRepository::new(employees_collection),
    )));
    let departments = Arc::new(DepartmentService::new(Arc::new(
        DocumentDepartmentRepository::new(departments_collection),
    )));

    HttpState::new(
        employees.clone(),
        employees,
        departments.clone(),
        departments,
    )
}
