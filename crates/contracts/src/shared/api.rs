//! Response envelopes used by every backend resource and the client-side
//! error type the UI turns into notifications.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Standard `{success, message, data}` envelope.
///
/// `success` is mandatory: it tells a wrapped body apart from a bare one in
/// [`decode_envelope`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Rejects `success: false`, keeps an absent `data` as `None`.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(self.message.unwrap_or_default()))
        }
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.into_result()?
            .ok_or_else(|| ApiError::Decode("response carried no data".to_string()))
    }
}

/// Body of create/update/delete calls.
pub type MessageResponse = ApiResponse<serde_json::Value>;

/// One page of a server-side search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_elements: usize,
}

impl<T> Default for PageData<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
        }
    }
}

/// Decode a response body that may or may not be wrapped.
///
/// Some endpoints wrap their payload, some (purchase search) return it bare.
/// A top-level `success` key marks the wrapped form, so a bad field inside
/// `data` is reported as such instead of as a shape mismatch.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let wrapped = value.as_object().is_some_and(|o| o.contains_key("success"));
    if wrapped {
        serde_json::from_value::<ApiResponse<T>>(value)
            .map_err(|e| ApiError::Decode(format!("data: {e}")))?
            .into_data()
    } else {
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("session expired")]
    Unauthorized,

    #[error("server returned {status}")]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Message the backend attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } if !m.trim().is_empty() => Some(m.as_str()),
            ApiError::Rejected(m) if !m.trim().is_empty() => Some(m.as_str()),
            _ => None,
        }
    }

    /// Text for the notification: server message first, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized => "Session expired, please log in again".to_string(),
            other => other
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Map a non-2xx response to an [`ApiError`].
pub fn error_from_status(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    ApiError::Status {
        status,
        message: parsed.message.or(parsed.error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_page_is_unwrapped() {
        let body = r#"{"success":true,"message":"ok","data":{"content":[1,2],"totalPages":1,"totalElements":2}}"#;
        let page: PageData<i32> = decode_envelope(body).unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.total_elements, 2);
    }

    #[test]
    fn bare_page_is_accepted() {
        let body = r#"{"content":[3],"totalPages":4,"totalElements":31}"#;
        let page: PageData<i32> = decode_envelope(body).unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.content, vec![3]);
    }

    #[test]
    fn rejected_envelope_keeps_server_message() {
        let body = r#"{"success":false,"message":"Product is in use"}"#;
        let err = decode_envelope::<PageData<i32>>(body).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Product is in use".to_string()));
        assert_eq!(err.user_message("Failed to delete product"), "Product is in use");
    }

    #[test]
    fn null_fields_in_wrapped_lookup_fall_back_to_defaults() {
        use crate::domain::a002_product::aggregate::Product;
        use crate::domain::common::RecordStatus;

        let body = r#"{"success":true,"data":[
            {"id":1,"name":"Rod","description":null,"minimumStock":null,"status":null}
        ]}"#;
        let products: Vec<Product> = decode_envelope(body).unwrap();
        assert_eq!(products[0].description, "");
        assert_eq!(products[0].minimum_stock, 0.0);
        assert_eq!(products[0].status, RecordStatus::Active);
    }

    #[test]
    fn customer_page_with_null_contact_fields() {
        use crate::domain::a003_customer::aggregate::Customer;

        let body = r#"{"success":true,"data":{"content":[
            {"id":3,"name":"Asha","mobile":"9876543210","email":null,"address":null,"remainingPaymentAmount":null}
        ],"totalPages":1,"totalElements":1}}"#;
        let page: PageData<Customer> = decode_envelope(body).unwrap();
        assert_eq!(page.content[0].email, "");
        assert_eq!(page.content[0].remaining_payment_amount, 0.0);
    }

    #[test]
    fn wrapped_decode_error_names_the_field() {
        let body = r#"{"success":true,"data":{"content":["x"],"totalPages":1}}"#;
        match decode_envelope::<PageData<i32>>(body) {
            Err(ApiError::Decode(msg)) => {
                assert!(msg.contains("invalid type"), "{msg}");
                assert!(!msg.contains("untagged"), "{msg}");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn fallback_used_without_server_message() {
        let err = error_from_status(500, "not json");
        assert_eq!(err.user_message("Failed to load sales"), "Failed to load sales");
    }

    #[test]
    fn status_body_message_is_extracted() {
        let err = error_from_status(400, r#"{"message":"Invoice already exists"}"#);
        assert_eq!(err.server_message(), Some("Invoice already exists"));
    }

    #[test]
    fn unauthorized_is_detected() {
        assert!(error_from_status(401, "").is_unauthorized());
    }
}
