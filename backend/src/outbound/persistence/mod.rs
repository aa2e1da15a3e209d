//! Document store persistence adapters.
//!
//! Repository implementations translate between domain records and stored
//! documents. No business logic resides here.
//!
//! - **Thin adapters**: uniqueness and existence rules live in the domain
//!   services; repositories only read and write.
//! - **Internal models**: document shapes (`models.rs`) are never exposed to
//!   the domain layer.
//! - **Strongly typed errors**: store failures are mapped to the repository
//!   port error types.
//! - **Two backends**: [`MongoDocumentStore`] for deployments and
//!   [`InMemoryDocumentStore`] for tests and runs without a connection
//!   string.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use employee_management::outbound::persistence::{
//!     DocumentEmployeeRepository, InMemoryDocumentStore,
//! };
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let store = InMemoryDocumentStore::new("EmployeeManagement");
//! let repo = DocumentEmployeeRepository::new(store.collection("Employees").await);
//! # let _ = repo;
//! # });
//! ```

mod document_department_repository;
mod document_employee_repository;
mod document_error_mapping;
pub mod document_store;
mod models;
mod mongo_collection;

pub use document_department_repository::DocumentDepartmentRepository;
pub use document_employee_repository::DocumentEmployeeRepository;
pub use document_store::{
    DocumentCollection, DocumentStoreError, InMemoryCollection, InMemoryDocumentStore,
};
pub use mongo_collection::{MongoCollection, MongoDocumentStore};
