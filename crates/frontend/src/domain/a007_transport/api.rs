use contracts::domain::a007_transport::aggregate::{
    TransportDetail, TransportListQuery, TransportPayload, TransportRow, RESOURCE,
};
use contracts::domain::common::{EntityId, IdRequest};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::HttpClient;

pub async fn detail(http: HttpClient, id: EntityId) -> Result<TransportDetail, ApiError> {
    http.post(&format!("{}/detail", RESOURCE), &IdRequest { id }).await
}

/// Unpaged listing, e.g. every transport of one customer.
pub async fn list(http: HttpClient, query: TransportListQuery) -> Result<Vec<TransportRow>, ApiError> {
    http.get_query(&format!("{}/list", RESOURCE), &query).await
}

pub async fn create(http: HttpClient, payload: TransportPayload) -> Result<Option<String>, ApiError> {
    http.create(&format!("{}/create", RESOURCE), &payload).await
}

/// The id travels in the body.
pub async fn update(http: HttpClient, payload: TransportPayload) -> Result<Option<String>, ApiError> {
    http.put(&format!("{}/update", RESOURCE), &payload).await
}

pub async fn delete(http: HttpClient, id: EntityId) -> Result<Option<String>, ApiError> {
    http.delete(&format!("{}/{}", RESOURCE, id)).await
}
