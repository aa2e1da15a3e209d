//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: document-store-backed employee and department
//!   repositories
//!
//! Adapters are thin translators that convert between domain types and
//! storage representations. They contain no business logic.

pub mod persistence;
