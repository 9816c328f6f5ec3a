use contracts::domain::a002_product::aggregate::{ProductPayload, RESOURCE};
use contracts::domain::common::EntityId;
use contracts::shared::api::ApiError;

use crate::shared::api_utils::HttpClient;
use crate::shared::ref_data::RefDataCache;

// Every mutation drops the cached active-product lookup.

pub async fn create(
    http: HttpClient,
    refs: RefDataCache,
    payload: ProductPayload,
) -> Result<Option<String>, ApiError> {
    let message = http.create(RESOURCE, &payload).await?;
    refs.invalidate_products();
    Ok(message)
}

pub async fn update(
    http: HttpClient,
    refs: RefDataCache,
    id: EntityId,
    payload: ProductPayload,
) -> Result<Option<String>, ApiError> {
    let message = http.put(&format!("{}/{}", RESOURCE, id), &payload).await?;
    refs.invalidate_products();
    Ok(message)
}

pub async fn delete(
    http: HttpClient,
    refs: RefDataCache,
    id: EntityId,
) -> Result<Option<String>, ApiError> {
    let message = http.delete(&format!("{}/{}", RESOURCE, id)).await?;
    refs.invalidate_products();
    Ok(message)
}
