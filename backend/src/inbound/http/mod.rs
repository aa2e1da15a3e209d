//! HTTP inbound adapter exposing REST endpoints.

pub mod departments;
pub mod employees;
pub mod error;
pub mod health;
pub mod routing;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::{ApiResult, json_config};
