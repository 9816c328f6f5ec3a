//! HTTP access to the backend.
//!
//! [`HttpClient`] is a `Copy` handle provided through context. Every call
//! carries the bearer token, decodes the `{success, message, data}`
//! envelope (or a bare body) and maps failures to [`ApiError`]. A `401`
//! clears the stored session, which sends the user back to the login page.

use contracts::shared::api::{
    decode_envelope, error_from_status, ApiError, MessageResponse, PageData,
};
use contracts::shared::search::SearchRequest;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::context::AuthState;
use crate::system::auth::storage;

#[derive(Clone, Copy)]
pub struct HttpClient {
    base: StoredValue<String>,
    auth_state: ReadSignal<AuthState>,
    set_auth_state: WriteSignal<AuthState>,
}

impl HttpClient {
    pub fn new(
        base: String,
        auth_state: ReadSignal<AuthState>,
        set_auth_state: WriteSignal<AuthState>,
    ) -> Self {
        Self {
            base: StoredValue::new(base),
            auth_state,
            set_auth_state,
        }
    }

    /// Build a full API URL from a path such as `/api/products/search`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.get_value(), path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match self.auth_state.with_untracked(|s| s.token.clone()) {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authorize(Request::get(&self.url(path)));
        let body = self.send(request.build()).await?;
        decode_envelope(&body)
    }

    /// GET with a query string built from `query`.
    pub async fn get_query<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
        let url = if qs.is_empty() {
            self.url(path)
        } else {
            format!("{}?{}", self.url(path), qs)
        };
        let body = self.send(self.authorize(Request::get(&url)).build()).await?;
        decode_envelope(&body)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::post(&self.url(path))).json(payload);
        let body = self.send(request).await?;
        decode_envelope(&body)
    }

    /// One page of a server-side search.
    pub async fn search<T: DeserializeOwned>(
        &self,
        path: &str,
        search: &SearchRequest,
    ) -> Result<PageData<T>, ApiError> {
        self.post(path, &search.to_body()).await
    }

    /// POST that only reports success; returns the server message.
    pub async fn create<B: Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<Option<String>, ApiError> {
        let request = self.authorize(Request::post(&self.url(path))).json(payload);
        let body = self.send(request).await?;
        command_outcome(&body)
    }

    pub async fn put<B: Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<Option<String>, ApiError> {
        let request = self.authorize(Request::put(&self.url(path))).json(payload);
        let body = self.send(request).await?;
        command_outcome(&body)
    }

    pub async fn delete(&self, path: &str) -> Result<Option<String>, ApiError> {
        let request = self.authorize(Request::delete(&self.url(path))).build();
        let body = self.send(request).await?;
        command_outcome(&body)
    }

    async fn send(&self, request: Result<Request, gloo_net::Error>) -> Result<String, ApiError> {
        let request = request.map_err(|e| ApiError::Network(e.to_string()))?;
        let url = request.url();
        let response = request.send().await.map_err(|e| {
            log::error!("request to {} failed: {}", url, e);
            ApiError::Network(e.to_string())
        })?;
        self.read(response).await
    }

    async fn read(&self, response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if (200..300).contains(&status) {
            return Ok(body);
        }
        let err = error_from_status(status, &body);
        if err.is_unauthorized() {
            self.expire_session();
        }
        log::warn!("{} {}: {}", response.url(), status, err);
        Err(err)
    }

    fn expire_session(&self) {
        log::warn!("Session rejected by the server, signing out");
        storage::clear_session();
        self.set_auth_state.set(AuthState::default());
    }
}

/// Mutations answer `{success, message}`; an empty or foreign body counts
/// as success.
fn command_outcome(body: &str) -> Result<Option<String>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str::<MessageResponse>(body) {
        Ok(resp) => {
            let message = resp.message.clone();
            resp.into_result()?;
            Ok(message)
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_outcome_reads_message() {
        let ok = command_outcome(r#"{"success":true,"message":"Category deleted successfully"}"#);
        assert_eq!(ok, Ok(Some("Category deleted successfully".to_string())));
        assert_eq!(command_outcome(""), Ok(None));
    }

    #[test]
    fn command_outcome_rejects_unsuccessful() {
        let err = command_outcome(r#"{"success":false,"message":"Product in use"}"#).unwrap_err();
        assert_eq!(err.user_message("Failed to delete product"), "Product in use");
    }
}
