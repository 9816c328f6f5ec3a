use contracts::domain::a001_category::aggregate::{Category, CategoryPayload, RESOURCE};
use contracts::domain::common::{EntityId, StatusLookupRequest};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::HttpClient;

/// Active categories for the product form. Never cached.
pub async fn fetch_active(http: HttpClient) -> Result<Vec<Category>, ApiError> {
    http.post(&format!("{}/getCategories", RESOURCE), &StatusLookupRequest::active())
        .await
}

pub async fn create(http: HttpClient, payload: CategoryPayload) -> Result<Option<String>, ApiError> {
    http.create(RESOURCE, &payload).await
}

pub async fn update(
    http: HttpClient,
    id: EntityId,
    payload: CategoryPayload,
) -> Result<Option<String>, ApiError> {
    http.put(&format!("{}/{}", RESOURCE, id), &payload).await
}

pub async fn delete(http: HttpClient, id: EntityId) -> Result<Option<String>, ApiError> {
    http.delete(&format!("{}/{}", RESOURCE, id)).await
}
