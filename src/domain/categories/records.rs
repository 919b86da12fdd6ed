//! Category Records

use serde::{Deserialize, Serialize};

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category identifier
    pub uuid: CategoryUuid,

    /// Display name
    pub name: String,
}
