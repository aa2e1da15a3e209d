//! Document-store-backed `EmployeeRepository` implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDetails, RecordId};

use super::document_error_mapping::map_document_error;
use super::document_store::{Document, DocumentCollection, DocumentStoreError, decode, encode};
use super::models::EmployeeDocument;

/// Employee repository over a document collection.
#[derive(Clone)]
pub struct DocumentEmployeeRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl DocumentEmployeeRepository {
    /// Create a repository over the given collection.
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }
}

fn map_store_error(error: DocumentStoreError) -> EmployeeRepositoryError {
    map_document_error(
        error,
        EmployeeRepositoryError::query,
        EmployeeRepositoryError::connection,
    )
}

fn to_employee(document: Document) -> Result<Employee, EmployeeRepositoryError> {
    decode::<EmployeeDocument>(document)
        .map_err(map_store_error)?
        .into_employee()
        .map_err(|err| EmployeeRepositoryError::query(format!("stored employee: {err}")))
}

#[async_trait]
impl EmployeeRepository for DocumentEmployeeRepository {
    async fn create(&self, details: &EmployeeDetails) -> Result<Employee, EmployeeRepositoryError> {
        let document = encode(&EmployeeDocument::from(details)).map_err(map_store_error)?;
        let id = self
            .collection
            .insert_one(document)
            .await
            .map_err(map_store_error)?;
        let id = RecordId::new(id)
            .map_err(|err| EmployeeRepositoryError::query(format!("assigned id: {err}")))?;
        Ok(Employee::new(id, details.clone()))
    }

    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        self.collection
            .find_all()
            .await
            .map_err(map_store_error)?
            .into_iter()
            .map(to_employee)
            .collect()
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<Employee>, EmployeeRepositoryError> {
        self.collection
            .find_by_id(id.as_ref())
            .await
            .map_err(map_store_error)?
            .map(to_employee)
            .transpose()
    }

    async fn update(&self, employee: &Employee) -> Result<bool, EmployeeRepositoryError> {
        let document =
            encode(&EmployeeDocument::from(employee.details())).map_err(map_store_error)?;
        let matched = self
            .collection
            .replace_by_id(employee.id().as_ref(), document)
            .await
            .map_err(map_store_error)?;
        Ok(matched > 0)
    }

    async fn delete(&self, id: &RecordId) -> Result<bool, EmployeeRepositoryError> {
        let removed = self
            .collection
            .delete_by_id(id.as_ref())
            .await
            .map_err(map_store_error)?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;
    use crate::outbound::persistence::document_store::{InMemoryCollection, MockDocumentCollection};

    #[fixture]
    fn repo() -> DocumentEmployeeRepository {
        DocumentEmployeeRepository::new(Arc::new(InMemoryCollection::new()))
    }

    fn details(name: &str, email: &str) -> EmployeeDetails {
        EmployeeDetails::new(name, email, 42000)
    }

    #[rstest]
    #[tokio::test]
    async fn create_then_find_returns_stored_fields(repo: DocumentEmployeeRepository) {
        let created = repo
            .create(&details("Ada", "ada@example.com"))
            .await
            .expect("create");

        let found = repo
            .find_by_id(created.id())
            .await
            .expect("find")
            .expect("present");
        assert_eq!(found, created);
        assert_eq!(found.salary(), Decimal::from(42000));
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_records_in_insertion_order(repo: DocumentEmployeeRepository) {
        repo.create(&details("Ada", "ada@example.com"))
            .await
            .expect("create");
        repo.create(&details("Grace", "grace@example.com"))
            .await
            .expect("create");

        let names: Vec<_> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|e| e.full_name().to_owned())
            .collect();
        assert_eq!(names, ["Ada", "Grace"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_and_delete_report_matches(repo: DocumentEmployeeRepository) {
        let created = repo
            .create(&details("Ada", "ada@example.com"))
            .await
            .expect("create");
        let renamed = created
            .clone()
            .with_details(details("Ada King", "ada@example.com"));

        assert!(repo.update(&renamed).await.expect("update"));
        assert_eq!(
            repo.find_by_id(created.id())
                .await
                .expect("find")
                .expect("present")
                .full_name(),
            "Ada King"
        );
        assert!(repo.delete(created.id()).await.expect("delete"));
        assert!(!repo.delete(created.id()).await.expect("second delete"));
        assert!(!repo.update(&renamed).await.expect("update after delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn unavailable_store_maps_to_connection_error() {
        let mut collection = MockDocumentCollection::new();
        collection
            .expect_find_all()
            .times(1)
            .return_once(|| Err(DocumentStoreError::unavailable("refused")));
        let repo = DocumentEmployeeRepository::new(Arc::new(collection));

        let err = repo.list().await.expect_err("store down");

        assert_eq!(err, EmployeeRepositoryError::connection("refused"));
    }

    #[rstest]
    #[tokio::test]
    async fn corrupt_document_maps_to_query_error() {
        let mut collection = MockDocumentCollection::new();
        collection.expect_find_by_id().times(1).return_once(|_| {
            Ok(json!({"_id": "1", "FullName": 7})
                .as_object()
                .cloned())
        });
        let repo = DocumentEmployeeRepository::new(Arc::new(collection));
        let id = RecordId::new("1").expect("id");

        let err = repo.find_by_id(&id).await.expect_err("corrupt document");

        assert!(matches!(err, EmployeeRepositoryError::Query { .. }));
    }
}
