use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::common::{null_default, EntityId};

pub const RESOURCE: &str = "/api/transport";

// ============================================================================
// Wire types sent on create / update
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportItem {
    pub product_id: EntityId,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportBag {
    pub weight: f64,
    pub items: Vec<TransportItem>,
}

/// Body of `POST /create` and `PUT /update` (the latter carries `id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub customer_id: EntityId,
    pub bags: Vec<TransportBag>,
}

// ============================================================================
// Read side
// ============================================================================

/// Row of the transport search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRow {
    pub id: EntityId,
    #[serde(default)]
    pub customer_id: Option<EntityId>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub total_bags: Option<u32>,
    #[serde(default)]
    pub total_weight: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A nested payload the backend sends either as JSON or as a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Embedded<T> {
    Value(T),
    Encoded(String),
}

impl<T: DeserializeOwned + Clone> Embedded<T> {
    pub fn decode(&self) -> Result<T, String> {
        match self {
            Embedded::Value(v) => Ok(v.clone()),
            Embedded::Encoded(s) => serde_json::from_str(s).map_err(|e| e.to_string()),
        }
    }
}

impl<T> Default for Embedded<T> {
    fn default() -> Self {
        Embedded::Encoded(String::new())
    }
}

/// Item as stored by the backend; ids and quantities may come back as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredItem {
    #[serde(default, deserialize_with = "lenient_id")]
    pub product_id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBag {
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "null_default")]
    pub items: Embedded<Vec<StoredItem>>,
}

/// Response of `POST /detail`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDetail {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub customer_id: Option<EntityId>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub bags: Embedded<Vec<StoredBag>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Query string of `GET /list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn value_to_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(value_to_f64))
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<EntityId>, D::Error> {
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_with_encoded_items() {
        let body = r#"{
            "id": 12,
            "customerId": "4",
            "bags": [
                {"weight": 2.5, "items": "[{\"productId\":7,\"quantity\":\"3\",\"remarks\":\"fragile\"}]"},
                {"weight": "1", "items": [{"productId": 9, "quantity": 1}]}
            ]
        }"#;
        let detail: TransportDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.customer_id, Some(4));
        let bags = detail.bags.decode().unwrap();
        let first = bags[0].items.decode().unwrap();
        assert_eq!(first[0].product_id, Some(7));
        assert_eq!(first[0].quantity, Some(3.0));
        assert_eq!(bags[1].weight, Some(1.0));
    }

    #[test]
    fn fully_encoded_bags() {
        let body = r#"{"id": 1, "customerId": 2, "bags": "[{\"weight\":4,\"items\":[]}]"}"#;
        let detail: TransportDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.bags.decode().unwrap().len(), 1);
    }

    #[test]
    fn update_payload_carries_id() {
        let payload = TransportPayload {
            id: Some(5),
            customer_id: 2,
            bags: vec![],
        };
        assert_eq!(
            serde_json::to_value(payload).unwrap(),
            serde_json::json!({"id": 5, "customerId": 2, "bags": []})
        );
    }
}
