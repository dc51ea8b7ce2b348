use serde::{Deserialize, Serialize};

/// Login/registration form payload, forwarded to the backend as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// What the backend hands back on a successful login or registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
}
