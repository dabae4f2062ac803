// src/dtos/role.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RolePayload {
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct NewRole {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: i32,
    pub name: String,
}

impl From<crate::models::role::Role> for RoleResponse {
    fn from(role: crate::models::role::Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
        }
    }
}
