//! Employee management backend library.
//!
//! The crate follows a ports-and-adapters layout:
//! - [`domain`] holds entities, business rules, and the port traits.
//! - [`inbound`] adapts HTTP requests onto the domain driving ports.
//! - [`outbound`] implements the driven ports over a document store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
