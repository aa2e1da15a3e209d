//! Employee data model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Mutable employee fields supplied by callers on create and update.
///
/// Field presence and uniqueness are enforced by
/// [`crate::domain::EmployeeService`], not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    /// Full name shown in listings.
    pub full_name: String,
    /// Contact email; unique across employees ignoring case.
    pub email: String,
    /// Salary amount. Not validated; exchanged as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
}

impl EmployeeDetails {
    /// Build a details value from owned parts.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        salary: impl Into<Decimal>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            salary: salary.into(),
        }
    }

    /// Whether `other` uses the same email, compared case-insensitively.
    pub fn shares_email_with(&self, other: &Self) -> bool {
        self.email.to_lowercase() == other.email.to_lowercase()
    }
}

/// Persisted employee record.
///
/// ## Invariants
/// - `id` is assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    id: RecordId,
    #[serde(flatten)]
    details: EmployeeDetails,
}

impl Employee {
    /// Build an employee from its identifier and field values.
    pub fn new(id: RecordId, details: EmployeeDetails) -> Self {
        Self { id, details }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// All mutable fields.
    pub fn details(&self) -> &EmployeeDetails {
        &self.details
    }

    /// Full name.
    pub fn full_name(&self) -> &str {
        self.details.full_name.as_str()
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        self.details.email.as_str()
    }

    /// Salary amount.
    pub fn salary(&self) -> Decimal {
        self.details.salary
    }

    /// Overwrite every mutable field, keeping the identifier.
    #[must_use]
    pub fn with_details(self, details: EmployeeDetails) -> Self {
        Self {
            id: self.id,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com", "ADA@Example.com", true)]
    #[case("ada@example.com", "grace@example.com", false)]
    fn email_comparison_ignores_case(#[case] left: &str, #[case] right: &str, #[case] same: bool) {
        let a = EmployeeDetails::new("Ada", left, 0);
        let b = EmployeeDetails::new("Grace", right, 0);
        assert_eq!(a.shares_email_with(&b), same);
    }

    #[rstest]
    fn with_details_keeps_identifier() {
        let id = RecordId::new("1").expect("valid id");
        let employee = Employee::new(id.clone(), EmployeeDetails::new("Old", "old@mail.com", 1));

        let updated = employee.with_details(EmployeeDetails::new("New", "new@mail.com", 20000));

        assert_eq!(updated.id(), &id);
        assert_eq!(updated.full_name(), "New");
        assert_eq!(updated.email(), "new@mail.com");
        assert_eq!(updated.salary(), Decimal::from(20000));
    }

    #[rstest]
    fn salary_keeps_cents_through_json() {
        let details = EmployeeDetails::new("Ada", "ada@example.com", Decimal::new(5_200_075, 2));

        let value = serde_json::to_value(&details).expect("serialise");
        assert_eq!(value["salary"], serde_json::json!(52000.75));

        let decoded: EmployeeDetails = serde_json::from_value(value).expect("deserialise");
        assert_eq!(decoded.salary, Decimal::new(5_200_075, 2));
    }
}
