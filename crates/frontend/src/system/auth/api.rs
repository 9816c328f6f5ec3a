use contracts::shared::api::ApiError;
use contracts::system::auth::{LoginData, LoginRequest, LOGIN_PATH};

use crate::shared::api_utils::HttpClient;

/// Login with email and password
pub async fn login(http: HttpClient, email: String, password: String) -> Result<LoginData, ApiError> {
    let request = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    http.post(LOGIN_PATH, &request).await
}

/// Text shown under the login form.
pub fn login_error_message(err: &ApiError) -> String {
    if err.is_unauthorized() {
        "Invalid email or password".to_string()
    } else {
        err.user_message("Login failed")
    }
}
