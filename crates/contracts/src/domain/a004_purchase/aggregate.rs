use serde::{Deserialize, Serialize};

use crate::domain::common::{null_default, EntityId};

pub const RESOURCE: &str = "/api/purchases";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: EntityId,
    pub product_id: EntityId,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<EntityId>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub unit_price: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub purchase_date: String,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub other_expenses: Option<f64>,
    #[serde(default)]
    pub remaining_quantity: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

impl Purchase {
    /// Whole units still available to sell.
    pub fn sellable_quantity(&self) -> u32 {
        let remaining = self.remaining_quantity.unwrap_or(self.quantity);
        if remaining.is_finite() && remaining > 0.0 {
            remaining.floor() as u32
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePayload {
    pub product_id: EntityId,
    pub quantity: u32,
    pub unit_price: f64,
    pub purchase_date: String,
    pub invoice_number: String,
    pub other_expenses: f64,
}
