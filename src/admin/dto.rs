use serde::Deserialize;

/// Request body for admin login.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}
