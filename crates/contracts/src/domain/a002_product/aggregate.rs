use serde::{Deserialize, Serialize};

use crate::domain::common::{null_default, EntityId, LookupOption, RecordStatus};

pub const RESOURCE: &str = "/api/products";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<EntityId>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub minimum_stock: f64,
    #[serde(default)]
    pub remaining_quantity: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub status: RecordStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    /// Stock at or under the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.remaining_quantity
            .map(|q| q <= self.minimum_stock)
            .unwrap_or(false)
    }
}

impl LookupOption for Product {
    fn option_id(&self) -> EntityId {
        self.id
    }

    fn option_label(&self) -> String {
        match &self.category_name {
            Some(cat) if !cat.is_empty() => format!("{} ({})", self.name, cat),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub category_id: EntityId,
    pub description: String,
    pub minimum_stock: f64,
    pub status: RecordStatus,
}
