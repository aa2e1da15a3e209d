//! Document collection abstraction and its in-memory backend.
//!
//! The networked MongoDB backend lives in [`super::mongo_collection`].
//!
//! Records are stored as JSON objects keyed by a storage-assigned `_id`
//! string. Repositories translate domain types to and from these documents;
//! the collection itself knows nothing about employees or departments.
//!
//! # Design
//!
//! - Collections keep insertion order so listings are stable
//! - Identifiers are 32-character lowercase hex strings
//! - Replace and delete report how many documents matched, never an error
//!   for an unknown id

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// A stored record: a JSON object with string keys.
pub type Document = Map<String, Value>;

/// Field holding the storage-assigned identifier.
pub const ID_FIELD: &str = "_id";

/// Errors raised by document collections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentStoreError {
    /// The backing store could not be reached.
    #[error("document store unavailable: {message}")]
    Unavailable { message: String },

    /// A document could not be encoded or decoded.
    #[error("malformed document: {message}")]
    Malformed { message: String },

    /// The store refused the operation.
    #[error("document operation rejected: {message}")]
    Rejected { message: String },
}

impl DocumentStoreError {
    /// Create an unavailable error with the given message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a malformed-document error with the given message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create a rejected-operation error with the given message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Encode a value as a document.
///
/// # Errors
///
/// Returns [`DocumentStoreError::Malformed`] when the value does not
/// serialise to a JSON object.
pub fn encode<T: Serialize>(value: &T) -> Result<Document, DocumentStoreError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(DocumentStoreError::malformed(format!(
            "expected an object, found {other}"
        ))),
        Err(err) => Err(DocumentStoreError::malformed(err.to_string())),
    }
}

/// Decode a document into a value.
///
/// # Errors
///
/// Returns [`DocumentStoreError::Malformed`] when the document does not
/// match the target shape.
pub fn decode<T: DeserializeOwned>(document: Document) -> Result<T, DocumentStoreError> {
    serde_json::from_value(Value::Object(document))
        .map_err(|err| DocumentStoreError::malformed(err.to_string()))
}

/// A named collection of documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Store a new document and return the identifier assigned to it.
    ///
    /// Any `_id` already present in `document` is replaced.
    async fn insert_one(&self, document: Document) -> Result<String, DocumentStoreError>;

    /// Return every document in insertion order.
    async fn find_all(&self) -> Result<Vec<Document>, DocumentStoreError>;

    /// Return the document with the given identifier, if any.
    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, DocumentStoreError>;

    /// Replace the document with the given identifier, keeping the identifier.
    ///
    /// Returns the number of documents matched (zero or one).
    async fn replace_by_id(&self, id: &str, document: Document)
    -> Result<u64, DocumentStoreError>;

    /// Delete the document with the given identifier.
    ///
    /// Returns the number of documents removed (zero or one).
    async fn delete_by_id(&self, id: &str) -> Result<u64, DocumentStoreError>;
}

fn has_id(document: &Document, id: &str) -> bool {
    document.get(ID_FIELD).and_then(Value::as_str) == Some(id)
}

/// Collection held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCollection {
    documents: RwLock<Vec<Document>>,
}

impl InMemoryCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentCollection for InMemoryCollection {
    async fn insert_one(&self, mut document: Document) -> Result<String, DocumentStoreError> {
        let id = Uuid::new_v4().simple().to_string();
        document.insert(ID_FIELD.to_owned(), Value::String(id.clone()));
        self.documents.write().await.push(document);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Document>, DocumentStoreError> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Document>, DocumentStoreError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|doc| has_id(doc, id)).cloned())
    }

    async fn replace_by_id(
        &self,
        id: &str,
        mut document: Document,
    ) -> Result<u64, DocumentStoreError> {
        let mut documents = self.documents.write().await;
        let Some(slot) = documents.iter_mut().find(|doc| has_id(doc, id)) else {
            return Ok(0);
        };
        document.insert(ID_FIELD.to_owned(), Value::String(id.to_owned()));
        *slot = document;
        Ok(1)
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64, DocumentStoreError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|doc| !has_id(doc, id));
        Ok((before - documents.len()) as u64)
    }
}

/// Named database of in-memory collections.
///
/// Cloning shares the underlying collections.
#[derive(Debug, Clone)]
pub struct InMemoryDocumentStore {
    database_name: String,
    collections: Arc<Mutex<HashMap<String, Arc<InMemoryCollection>>>>,
}

impl InMemoryDocumentStore {
    /// Create an empty database with the given name.
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            collections: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Name of the database.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Return the named collection, creating it on first use.
    pub async fn collection(&self, name: &str) -> Arc<InMemoryCollection> {
        let mut collections = self.collections.lock().await;
        Arc::clone(
            collections
                .entry(name.to_owned())
                .or_insert_with(|| Arc::new(InMemoryCollection::new())),
        )
    }
}
