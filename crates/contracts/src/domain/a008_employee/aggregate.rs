use serde::{Deserialize, Serialize};

use crate::domain::common::{null_default, EntityId, RecordStatus};

pub const RESOURCE: &str = "/api/employees";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub mobile_number: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_default")]
    pub designation: String,
    #[serde(default, deserialize_with = "null_default")]
    pub department: String,
    #[serde(default)]
    pub joining_date: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: String,
    pub mobile_number: String,
    pub email: String,
    pub address: String,
    pub designation: String,
    pub department: String,
    pub joining_date: String,
    pub status: RecordStatus,
}
