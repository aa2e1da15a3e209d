//! Department data model.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// Mutable department fields supplied by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDetails {
    /// Department name; unique across departments ignoring case.
    pub name: String,
}

impl DepartmentDetails {
    /// Build a details value from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether `other` uses the same name, compared case-insensitively.
    pub fn shares_name_with(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

/// Persisted department record.
///
/// Employees are not linked at the data layer; the association is nominal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    id: RecordId,
    #[serde(flatten)]
    details: DepartmentDetails,
}

impl Department {
    /// Build a department from its identifier and field values.
    pub fn new(id: RecordId, details: DepartmentDetails) -> Self {
        Self { id, details }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// All mutable fields.
    pub fn details(&self) -> &DepartmentDetails {
        &self.details
    }

    /// Department name.
    pub fn name(&self) -> &str {
        self.details.name.as_str()
    }

    /// Overwrite the mutable fields, keeping the identifier.
    #[must_use]
    pub fn with_details(self, details: DepartmentDetails) -> Self {
        Self {
            id: self.id,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_comparison_ignores_case() {
        assert!(DepartmentDetails::new("HR").shares_name_with(&DepartmentDetails::new("hr")));
        assert!(!DepartmentDetails::new("HR").shares_name_with(&DepartmentDetails::new("IT")));
    }

    #[test]
    fn serialises_flat_camel_case() {
        let department = Department::new(
            RecordId::new("abc").expect("valid id"),
            DepartmentDetails::new("Finance"),
        );
        let value = serde_json::to_value(&department).expect("serialises");
        assert_eq!(value, serde_json::json!({ "id": "abc", "name": "Finance" }));
    }
}
