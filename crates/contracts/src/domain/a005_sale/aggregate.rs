use serde::{Deserialize, Serialize};

use crate::domain::common::{null_default, EntityId};

pub const RESOURCE: &str = "/api/sales";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: EntityId,
    #[serde(default)]
    pub purchase_id: Option<EntityId>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub unit_price: f64,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub sale_date: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub other_expenses: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePayload {
    pub purchase_id: EntityId,
    pub quantity: u32,
    pub unit_price: f64,
    pub sale_date: String,
    pub invoice_number: String,
    pub other_expenses: f64,
}
