use contracts::domain::a003_customer::aggregate::{CustomerPayload, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::HttpClient;
use crate::shared::ref_data::RefDataCache;

pub async fn create(
    http: HttpClient,
    refs: RefDataCache,
    payload: CustomerPayload,
) -> Result<Option<String>, ApiError> {
    let message = http.create(RESOURCE, &payload).await?;
    refs.invalidate_customers();
    Ok(message)
}

pub async fn update(
    http: HttpClient,
    refs: RefDataCache,
    id: EntityId,
    payload: CustomerPayload,
) -> Result<Option<String>, ApiError> {
    let message = http.put(&format!("{}/{}", RESOURCE, id), &payload).await?;
    refs.invalidate_customers();
    Ok(message)
}
