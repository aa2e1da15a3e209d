//! Storage-assigned record identifier shared by employees and departments.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`RecordId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdValidationError {
    /// The identifier was empty or only whitespace.
    #[error("record id must not be empty")]
    Blank,
}

/// Opaque identifier assigned by the document store on insert.
///
/// ## Invariants
/// - The identifier is non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use employee_management::domain::RecordId;
///
/// let id = RecordId::new("64b7f0c2").expect("non-blank id");
/// assert_eq!(id.as_ref(), "64b7f0c2");
/// assert!(RecordId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Validate and construct a [`RecordId`].
    pub fn new(id: impl Into<String>) -> Result<Self, RecordIdValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RecordIdValidationError::Blank);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_ids_are_rejected(#[case] raw: &str) {
        assert_eq!(RecordId::new(raw), Err(RecordIdValidationError::Blank));
    }

    #[rstest]
    fn deserialising_a_blank_id_fails() {
        let result = serde_json::from_str::<RecordId>("\" \"");
        assert!(result.is_err());
    }
}
