//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their serialised shape and register under the domain
//! type's path.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The referenced resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request clashes with an existing resource.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Department with this name already exists.")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level failure context.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Employee)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    /// Storage-assigned identifier.
    #[schema(example = "6f1c2a9be0d54c7f9a3e51d2b8c4e7a0")]
    id: String,
    /// Full name.
    #[schema(rename = "fullName", example = "Ada Lovelace")]
    full_name: String,
    /// Contact email, unique ignoring case.
    #[schema(example = "ada@example.com")]
    email: String,
    /// Salary amount.
    #[schema(example = 52000.0)]
    salary: f64,
}

/// OpenAPI schema for [`crate::domain::Department`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Department)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DepartmentSchema {
    /// Storage-assigned identifier.
    #[schema(example = "0b7e4d1f2c3a4b5c8d9e0f1a2b3c4d5e")]
    id: String,
    /// Department name, unique ignoring case.
    #[schema(example = "Finance")]
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    #[case(ErrorCodeSchema::name(), "crate.domain.ErrorCode")]
    #[case(ErrorSchema::name(), "crate.domain.Error")]
    #[case(EmployeeSchema::name(), "crate.domain.Employee")]
    #[case(DepartmentSchema::name(), "crate.domain.Department")]
    fn schemas_register_under_domain_paths(
        #[case] name: std::borrow::Cow<'static, str>,
        #[case] expected: &str,
    ) {
        // utoipa replaces :: with . in schema names
        assert_eq!(name, expected);
    }

    #[rstest]
    fn error_code_schema_lists_every_code() {
        let json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "not_found", "conflict", "internal_error"] {
            assert!(json.contains(code), "missing {code}");
        }
    }

    #[rstest]
    #[case::error(schema_to_json::<ErrorSchema>(), "traceId")]
    #[case::employee(schema_to_json::<EmployeeSchema>(), "fullName")]
    #[case::department(schema_to_json::<DepartmentSchema>(), "name")]
    fn schemas_use_wire_field_names(#[case] json: String, #[case] field: &str) {
        assert!(json.contains(field), "schema should contain {field}");
    }
}
