use serde::{Deserialize, Serialize};

use crate::domain::common::{null_default, EntityId, LookupOption, RecordStatus};

pub const RESOURCE: &str = "/api/customers";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub mobile: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default)]
    pub gst: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_default")]
    pub remaining_payment_amount: f64,
    #[serde(default)]
    pub next_action_date: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub status: RecordStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl LookupOption for Customer {
    fn option_id(&self) -> EntityId {
        self.id
    }

    fn option_label(&self) -> String {
        if self.mobile.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.mobile)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    pub mobile: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<String>,
    pub address: String,
    pub remaining_payment_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub status: RecordStatus,
}
