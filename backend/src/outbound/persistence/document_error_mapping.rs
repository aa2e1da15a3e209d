//! Shared document store error mapping for repository adapters.

use tracing::debug;

use super::document_store::DocumentStoreError;

/// Map store errors into repository-specific query/connection constructors.
pub fn map_document_error<E, Q, C>(error: DocumentStoreError, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    debug!(%error, "document store operation failed");
    match error {
        DocumentStoreError::Unavailable { message } => connection(message),
        DocumentStoreError::Malformed { message } | DocumentStoreError::Rejected { message } => {
            query(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    #[rstest]
    #[case(DocumentStoreError::unavailable("down"), Mapped::Connection("down".into()))]
    #[case(DocumentStoreError::malformed("bad"), Mapped::Query("bad".into()))]
    #[case(DocumentStoreError::rejected("duplicate key"), Mapped::Query("duplicate key".into()))]
    fn maps_each_variant(#[case] error: DocumentStoreError, #[case] expected: Mapped) {
        let mapped = map_document_error(error, Mapped::Query, Mapped::Connection);
        assert_eq!(mapped, expected);
    }
}
