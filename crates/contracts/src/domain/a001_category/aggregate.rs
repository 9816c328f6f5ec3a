use serde::{Deserialize, Serialize};

use crate::domain::common::{null_default, EntityId, LookupOption, RecordStatus};

pub const RESOURCE: &str = "/api/categories";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub status: RecordStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl LookupOption for Category {
    fn option_id(&self) -> EntityId {
        self.id
    }

    fn option_label(&self) -> String {
        self.name.clone()
    }
}

/// Body of create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub status: RecordStatus,
}
