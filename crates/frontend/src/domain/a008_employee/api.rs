use contracts::domain::a008_employee::aggregate::{EmployeePayload, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::HttpClient;

pub async fn create(http: HttpClient, payload: EmployeePayload) -> Result<Option<String>, ApiError> {
    http.create(RESOURCE, &payload).await
}

pub async fn update(
    http: HttpClient,
    id: EntityId,
    payload: EmployeePayload,
) -> Result<Option<String>, ApiError> {
    http.put(&format!("{}/{}", RESOURCE, id), &payload).await
}

pub async fn delete(http: HttpClient, id: EntityId) -> Result<Option<String>, ApiError> {
    http.delete(&format!("{}/{}", RESOURCE, id)).await
}
