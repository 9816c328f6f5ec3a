//! Types shared by every resource.

use serde::{Deserialize, Deserializer, Serialize};

/// Backend primary keys are plain integers.
pub type EntityId = i64;

/// `A` / `I` flag carried by categories, products, customers, employees
/// and powder-coating processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    #[serde(rename = "A")]
    Active,
    #[serde(rename = "I")]
    Inactive,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 2] = [RecordStatus::Active, RecordStatus::Inactive];

    pub fn code(self) -> &'static str {
        match self {
            RecordStatus::Active => "A",
            RecordStatus::Inactive => "I",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(RecordStatus::Active),
            "I" => Some(RecordStatus::Inactive),
            _ => None,
        }
    }
}

/// Anything that can be offered in a select box.
pub trait LookupOption {
    fn option_id(&self) -> EntityId;
    fn option_label(&self) -> String;
}

/// Body of the `getProducts` / `getCustomers` / `getCategories` lookups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusLookupRequest {
    pub status: RecordStatus,
}

impl StatusLookupRequest {
    pub fn active() -> Self {
        Self {
            status: RecordStatus::Active,
        }
    }
}

/// Body of the `getProcess` / transport `detail` calls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IdRequest {
    pub id: EntityId,
}

/// `#[serde(default)]` only covers a missing key; this also maps an explicit
/// `null` to the type's default.
pub fn null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Parses an id from a `<select>` value; empty means "none".
pub fn parse_id(raw: &str) -> Option<EntityId> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_codes() {
        assert_eq!(serde_json::to_string(&RecordStatus::Inactive).unwrap(), "\"I\"");
        let s: RecordStatus = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(s, RecordStatus::Active);
        assert_eq!(RecordStatus::from_code("X"), None);
    }

    #[test]
    fn lookup_body() {
        assert_eq!(
            serde_json::to_value(StatusLookupRequest::active()).unwrap(),
            serde_json::json!({"status": "A"})
        );
    }
}
