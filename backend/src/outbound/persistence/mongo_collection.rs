//! MongoDB backend for [`DocumentCollection`].
//!
//! Documents cross the driver boundary as BSON. Identifiers are
//! server-side `ObjectId`s exposed as 24-character hex strings; an id that
//! does not parse as an `ObjectId` cannot name a stored document and so
//! matches nothing.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Bson, doc};
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection, Database};
use serde_json::Value;

use super::document_store::{Document, DocumentCollection, DocumentStoreError, ID_FIELD};

/// Client bound to one MongoDB database.
#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    database: Database,
}

impl MongoDocumentStore {
    /// Parse `uri` and bind to `database_name`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation rather than here.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Unavailable`] when the connection string
    /// is invalid.
    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, DocumentStoreError> {
        let client = Client::with_uri_str(uri).await.map_err(map_driver_error)?;
        Ok(Self {
            database: client.database(database_name),
        })
    }

    /// Name of the database.
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Handle to the named collection.
    pub fn collection(&self, name: &str) -> Arc<MongoCollection> {
        Arc::new(MongoCollection {
            inner: self.database.collection(name),
        })
    }
}

/// A MongoDB collection of untyped documents.
#[derive(Debug, Clone)]
pub struct MongoCollection {
    inner: Collection<bson::Document>,
}

fn map_driver_error(error: mongodb::error::Error) -> DocumentStoreError {
    match *error.kind {
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::DnsResolve { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::InvalidArgument { .. } => DocumentStoreError::unavailable(error.to_string()),
        ErrorKind::BsonSerialization(_) | ErrorKind::BsonDeserialization(_) => {
            DocumentStoreError::malformed(error.to_string())
        }
        _ => DocumentStoreError::rejected(error.to_string()),
    }
}

fn id_filter(id: &str) -> Option<bson::Document> {
    ObjectId::parse_str(id)
        .ok()
        .map(|oid| doc! { "_id": oid })
}

/// Convert a JSON document to BSON, leaving `_id` to the server.
fn to_bson(mut document: Document) -> Result<bson::Document, DocumentStoreError> {
    document.remove(ID_FIELD);
    bson::to_document(&document).map_err(|err| DocumentStoreError::malformed(err.to_string()))
}

/// Convert a stored BSON document to JSON with `_id` as a plain string.
fn from_bson(mut document: bson::Document) -> Result<Document, DocumentStoreError> {
    let id = match document.remove(ID_FIELD) {
        Some(Bson::ObjectId(oid)) => Some(oid.to_hex()),
        Some(Bson::String(id)) => Some(id),
        Some(other) => {
            return Err(DocumentStoreError::malformed(format!(
                "unsupported identifier {other}"
            )));
        }
        None => None,
    };
    let Value::Object(mut json) = Bson::Document(document).into_relaxed_extjson() else {
        return Err(DocumentStoreError::malformed("expected an object"));
    };
    if let Some(id) = id {
        json.insert(ID_FIELD.to_owned(), Value::String(id));
    }
    Ok(json)
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    async fn insert_one(&self, document: Document) -> Result<String, DocumentStoreError> {
        let result = self
            .inner
            .insert_one(to_bson(document)?)
            .await
            .map_err(map_driver_error)?;
        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Err(DocumentStoreError::malformed(format!(
                "unexpected inserted id {other}"
            ))),
        }
    }

    async fn find_all(&self) -> Result<Vec<Document>, DocumentStoreError> {
        let cursor = self.inner.find(doc! {}).await.map_err(map_driver_error)?;
        let documents: Vec<bson::Document> =
            cursor.try_collect().await.map_err(map_driver_error)?;
        documents.into_iter().map(from_bson).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, DocumentStoreError> {
        let Some(filter) = id_filter(id) else {
            return Ok(None);
        };
        self.inner
            .find_one(filter)
            .await
            .map_err(map_driver_error)?
            .map(from_bson)
            .transpose()
    }

    async fn replace_by_id(
        &self,
        id: &str,
        document: Document,
    ) -> Result<u64, DocumentStoreError> {
        let Some(filter) = id_filter(id) else {
            return Ok(0);
        };
        let result = self
            .inner
            .replace_one(filter, to_bson(document)?)
            .await
            .map_err(map_driver_error)?;
        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, DocumentStoreError> {
        let Some(filter) = id_filter(id) else {
            return Ok(0);
        };
        let result = self
            .inner
            .delete_one(filter)
            .await
            .map_err(map_driver_error)?;
        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn object(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[rstest]
    #[case("64b7f0c2a1b2c3d4e5f60718", true)]
    #[case("0123456789abcdef01234567", true)]
    #[case("missing", false)]
    #[case("0123456789abcdef0123456789abcdef", false)]
    fn only_object_ids_build_filters(#[case] id: &str, #[case] usable: bool) {
        assert_eq!(id_filter(id).is_some(), usable);
    }

    #[rstest]
    fn outgoing_documents_leave_the_identifier_to_the_server() {
        let bson = to_bson(object(json!({
            "_id": "64b7f0c2a1b2c3d4e5f60718",
            "FullName": "Ada",
            "Salary": "52000.75",
        })))
        .expect("converts");

        assert!(!bson.contains_key(ID_FIELD));
        assert_eq!(bson.get_str("FullName").expect("name"), "Ada");
        assert_eq!(bson.get_str("Salary").expect("salary"), "52000.75");
    }

    #[rstest]
    fn stored_documents_expose_hex_identifiers() {
        let oid = ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").expect("valid oid");
        let stored = doc! { "_id": oid, "Name": "HR", "Headcount": 3_i32, "Budget": 1.5 };

        let json = from_bson(stored).expect("converts");

        assert_eq!(
            Value::Object(json),
            json!({
                "_id": "64b7f0c2a1b2c3d4e5f60718",
                "Name": "HR",
                "Headcount": 3,
                "Budget": 1.5,
            })
        );
    }

    #[rstest]
    fn unsupported_identifiers_are_malformed() {
        let err = from_bson(doc! { "_id": 7_i32, "Name": "HR" }).expect_err("int id");
        assert!(matches!(err, DocumentStoreError::Malformed { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn invalid_connection_strings_are_unavailable() {
        let err = MongoDocumentStore::connect("not-a-connection-string", "EmployeeManagement")
            .await
            .expect_err("scheme is required");
        assert!(matches!(err, DocumentStoreError::Unavailable { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_ids_match_nothing_without_a_round_trip() {
        let store = MongoDocumentStore::connect("mongodb://127.0.0.1:1", "EmployeeManagement")
            .await
            .expect("uri parses");
        let collection = store.collection("Employees");

        assert_eq!(store.database_name(), "EmployeeManagement");
        assert!(collection.find_by_id("missing").await.expect("find").is_none());
        assert_eq!(
            collection
                .replace_by_id("missing", Document::new())
                .await
                .expect("replace"),
            0
        );
        assert_eq!(collection.delete_by_id("missing").await.expect("delete"), 0);
    }
}
