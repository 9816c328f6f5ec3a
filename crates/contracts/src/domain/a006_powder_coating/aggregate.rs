use serde::{Deserialize, Serialize};

use crate::domain::common::{null_default, EntityId, RecordStatus};

pub const RESOURCE: &str = "/api/powder-coating";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowderCoatingProcess {
    pub id: EntityId,
    pub product_id: EntityId,
    #[serde(default, deserialize_with = "null_default")]
    pub product_name: String,
    pub customer_id: EntityId,
    #[serde(default, deserialize_with = "null_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub remaining_quantity: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub status: RecordStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl PowderCoatingProcess {
    /// Units still with the coater; returns are capped by this.
    pub fn returnable_quantity(&self) -> u32 {
        if self.remaining_quantity.is_finite() && self.remaining_quantity > 0.0 {
            self.remaining_quantity.floor() as u32
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPayload {
    pub customer_id: EntityId,
    pub product_id: EntityId,
    pub quantity: u32,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnPayload {
    pub id: EntityId,
    pub return_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}
