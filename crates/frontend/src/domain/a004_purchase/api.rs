use contracts::domain::a004_purchase::aggregate::{PurchasePayload, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::HttpClient;

pub async fn create(http: HttpClient, payload: PurchasePayload) -> Result<Option<String>, ApiError> {
    http.create(RESOURCE, &payload).await
}

pub async fn delete(http: HttpClient, id: EntityId) -> Result<Option<String>, ApiError> {
    http.delete(&format!("{}/{}", RESOURCE, id)).await
}
