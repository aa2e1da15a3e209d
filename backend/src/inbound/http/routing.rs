//! Route scopes shared by the entity handlers.
//!
//! Each entity lives under a single segment named after it (`/Employee`,
//! `/Department`) that matches in any letter case.

use actix_web::{Scope, web};
use serde::Deserialize;
use utoipa::IntoParams;

/// Scope whose first segment matches `entity` ignoring case.
///
/// `entity` must be a plain word; it is embedded in the route regex as is.
pub fn entity_scope(entity: &str) -> Scope {
    web::scope(&format!("/{{entity:(?i){entity}}}"))
}

/// Path parameters of an item route inside an [`entity_scope`].
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct RecordPath {
    /// Storage-assigned record identifier.
    pub id: String,
}
