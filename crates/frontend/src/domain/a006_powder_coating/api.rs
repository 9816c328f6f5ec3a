use contracts::domain::a006_powder_coating::aggregate::{
    PowderCoatingProcess, ProcessPayload, ReturnPayload, RESOURCE,
};
use contracts::domain::common::{EntityId, IdRequest};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::HttpClient;

/// Current server copy of one process, used before editing.
pub async fn get_process(http: HttpClient, id: EntityId) -> Result<PowderCoatingProcess, ApiError> {
    http.post(&format!("{}/getProcess", RESOURCE), &IdRequest { id }).await
}

pub async fn create(http: HttpClient, payload: ProcessPayload) -> Result<Option<String>, ApiError> {
    http.create(RESOURCE, &payload).await
}

pub async fn update(
    http: HttpClient,
    id: EntityId,
    payload: ProcessPayload,
) -> Result<Option<String>, ApiError> {
    http.put(&format!("{}/{}", RESOURCE, id), &payload).await
}

pub async fn delete(http: HttpClient, id: EntityId) -> Result<Option<String>, ApiError> {
    http.delete(&format!("{}/{}", RESOURCE, id)).await
}

pub async fn create_return(http: HttpClient, payload: ReturnPayload) -> Result<Option<String>, ApiError> {
    http.create(&format!("{}/return", RESOURCE), &payload).await
}
