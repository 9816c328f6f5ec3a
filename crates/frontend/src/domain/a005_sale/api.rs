use contracts::domain::a005_sale::aggregate::{SalePayload, RESOURCE};
use contracts::shared::api::ApiError;

use crate::shared::api_utils::HttpClient;

pub async fn create(http: HttpClient, payload: SalePayload) -> Result<Option<String>, ApiError> {
    http.create(RESOURCE, &payload).await
}
