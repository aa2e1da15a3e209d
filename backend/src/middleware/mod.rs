//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Currently only trace
//! identifier scoping and request logging.

pub mod trace;

pub use trace::Trace;
