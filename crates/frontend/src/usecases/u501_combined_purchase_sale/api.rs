use contracts::shared::api::ApiError;
use contracts::usecases::u501_combined_purchase_sale::request::{
    CombinedPurchaseSaleRequest, RESOURCE,
};

use crate::shared::api_utils::HttpClient;

pub async fn submit(
    http: HttpClient,
    request: CombinedPurchaseSaleRequest,
) -> Result<Option<String>, ApiError> {
    http.create(RESOURCE, &request).await
}
