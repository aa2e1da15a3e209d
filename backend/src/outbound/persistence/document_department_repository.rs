//! Document-store-backed `DepartmentRepository` implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{DepartmentRepository, DepartmentRepositoryError};
use crate::domain::{Department, DepartmentDetails, RecordId};

use super::document_error_mapping::map_document_error;
use super::document_store::{Document, DocumentCollection, DocumentStoreError, decode, encode};
use super::models::DepartmentDocument;

/// Department repository over a document collection.
#[derive(Clone)]
pub struct DocumentDepartmentRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl DocumentDepartmentRepository {
    /// Create a repository over the given collection.
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }
}

fn map_store_error(error: DocumentStoreError) -> DepartmentRepositoryError {
    map_document_error(
        error,
        DepartmentRepositoryError::query,
        DepartmentRepositoryError::connection,
    )
}

fn to_department(document: Document) -> Result<Department, DepartmentRepositoryError> {
    decode::<DepartmentDocument>(document)
        .map_err(map_store_error)?
        .into_department()
        .map_err(|err| DepartmentRepositoryError::query(format!("stored department: {err}")))
}

#[async_trait]
impl DepartmentRepository for DocumentDepartmentRepository {
    async fn create(
        &self,
        details: &DepartmentDetails,
    ) -> Result<Department, DepartmentRepositoryError> {
        let document = encode(&DepartmentDocument::from(details)).map_err(map_store_error)?;
        let id = self
            .collection
            .insert_one(document)
            .await
            .map_err(map_store_error)?;
        let id = RecordId::new(id)
            .map_err(|err| DepartmentRepositoryError::query(format!("assigned id: {err}")))?;
        Ok(Department::new(id, details.clone()))
    }

    async fn list(&self) -> Result<Vec<Department>, DepartmentRepositoryError> {
        self.collection
            .find_all()
            .await
            .map_err(map_store_error)?
            .into_iter()
            .map(to_department)
            .collect()
    }

    async fn find_by_id(
        &self,
        id: &RecordId,
    ) -> Result<Option<Department>, DepartmentRepositoryError> {
        self.collection
            .find_by_id(id.as_ref())
            .await
            .map_err(map_store_error)?
            .map(to_department)
            .transpose()
    }

    async fn update(&self, department: &Department) -> Result<bool, DepartmentRepositoryError> {
        let document =
            encode(&DepartmentDocument::from(department.details())).map_err(map_store_error)?;
        let matched = self
            .collection
            .replace_by_id(department.id().as_ref(), document)
            .await
            .map_err(map_store_error)?;
        Ok(matched > 0)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, DepartmentRepositoryError> {
        let removed = self
            .collection
            .delete_by_id(id.as_ref())
            .await
            .map_err(map_store_error)?;
        Ok(removed > 0)
    }
}
