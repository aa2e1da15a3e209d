//! Shared request-shape validation helpers for inbound HTTP adapters.
//!
//! Shape checks run before any service call and only look at the bound body:
//! required fields present, email shaped like `local@domain`. Blank values
//! pass through so the domain services can report them with their own
//! messages.

use serde::Serialize;
use serde_json::json;

use crate::domain::Error;

/// Message returned when any field fails the shape check.
pub(crate) const VALIDATION_FAILED: &str = "One or more validation errors occurred.";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidEmail,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidEmail => "invalid_email",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// One failed field in a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    field: &'static str,
    code: &'static str,
    message: String,
}

impl FieldError {
    fn new(field: FieldName, code: ErrorCode, message: String) -> Self {
        Self {
            field: field.as_str(),
            code: code.as_str(),
            message,
        }
    }

    /// Name of the offending field as it appears in the JSON body.
    pub fn field(&self) -> &str {
        self.field
    }

    /// Machine-readable failure code.
    pub fn code(&self) -> &str {
        self.code
    }
}

/// Accumulates field errors across a whole request body.
#[derive(Debug, Default)]
pub(crate) struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a missing-field failure when `value` is absent, returning the
    /// value otherwise.
    pub(crate) fn require<T>(&mut self, field: FieldName, value: Option<T>) -> Option<T> {
        if value.is_none() {
            let name = field.as_str();
            self.0.push(FieldError::new(
                field,
                ErrorCode::MissingField,
                format!("The {name} field is required."),
            ));
        }
        value
    }

    /// Record an invalid-email failure for a present, non-blank value that
    /// is not shaped like `local@domain`.
    pub(crate) fn check_email(&mut self, field: FieldName, value: Option<&str>) {
        let Some(value) = value else { return };
        if value.trim().is_empty() || is_email_shaped(value.trim()) {
            return;
        }
        let name = field.as_str();
        self.0.push(FieldError::new(
            field,
            ErrorCode::InvalidEmail,
            format!("The {name} field is not a valid e-mail address."),
        ));
    }

    /// Finish validation, turning any recorded failures into a domain error.
    pub(crate) fn finish(self) -> Result<(), Error> {
        if self.0.is_empty() {
            return Ok(());
        }
        Err(validation_error(&self.0))
    }
}

fn is_email_shaped(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

pub(crate) fn validation_error(errors: &[FieldError]) -> Error {
    Error::invalid_request(VALIDATION_FAILED).with_details(json!({
        "code": "validation_failed",
        "errors": errors,
    }))
}
