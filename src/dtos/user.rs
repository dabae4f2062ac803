// src/dtos/user.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw POST/PUT body for a user. Every field is optional so that missing
/// keys are reported by the validator, not the deserializer; `role` stays a
/// raw JSON value for the same reason.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub role: Option<Value>,
}

/// A user payload that has passed validation. The password is still the
/// plaintext here; handlers hash it before it touches the database.
#[derive(Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: i32,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: i32,
}

// The password hash never leaves the server.
impl From<crate::models::user::User> for UserResponse {
    fn from(user: crate::models::user::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
        }
    }
}
