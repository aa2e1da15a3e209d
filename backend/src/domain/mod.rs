//! Domain primitives, services, and ports.
//!
//! Purpose: define the employee and department records, the rules that
//! govern them, and the ports through which adapters reach those rules.
//! Nothing here knows about HTTP or the document store.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Employee / Department: persisted records.
//! - EmployeeService / DepartmentService: driving port implementations.

pub mod department;
pub mod department_service;
pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod record_id;
pub mod trace_id;

pub use self::department::{Department, DepartmentDetails};
pub use self::department_service::DepartmentService;
pub use self::employee::{Employee, EmployeeDetails};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::record_id::{RecordId, RecordIdValidationError};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use employee_management::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Employee with ID 1 not found."))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
