use serde::{Deserialize, Serialize};

/// Registered account as the backend returns it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
    pub subscription_level: String,
}

/// Registration payload for `POST /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

/// Login payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Bearer token issued on login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl Token {
    /// Value for the `Authorization` request header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
