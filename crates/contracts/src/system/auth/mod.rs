use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `data` of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "User".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::decode_envelope;

    #[test]
    fn wrapped_login_response() {
        let body = r#"{"success":true,"message":"Login successful","data":{"token":"abc","user":{"id":1,"name":"Admin","email":"admin@shop.in"}}}"#;
        let data: LoginData = decode_envelope(body).unwrap();
        assert_eq!(data.token, "abc");
        assert_eq!(data.user.unwrap().display_name(), "Admin");
    }

    #[test]
    fn bare_login_response() {
        let data: LoginData = decode_envelope(r#"{"token":"xyz"}"#).unwrap();
        assert_eq!(data.token, "xyz");
        assert!(data.user.is_none());
    }
}
