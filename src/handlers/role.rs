// src/handlers/role.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, instrument};

use crate::dtos::role::{RolePayload, RoleResponse};
use crate::error::AppError;
use crate::models::role::Role;
use crate::state::AppState;
use crate::validation;

// GET /api/roles - List all roles
#[instrument(skip(state))]
pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleResponse>>, AppError> {
    let roles = sqlx::query_as::<_, Role>("SELECT id, name FROM roles ORDER BY id")
        .fetch_all(&state.db_pool)
        .await
        .map_err(|e| {
            error!(?e, "Failed to fetch roles");
            AppError::from(e)
        })?;

    Ok(Json(roles.into_iter().map(RoleResponse::from).collect()))
}

// GET /api/roles/:id - Get single role
#[instrument(skip(state), fields(id))]
pub async fn get_role(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<RoleResponse>, AppError> {
    let role = sqlx::query_as::<_, Role>("SELECT id, name FROM roles WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Role not found"))?;

    Ok(Json(RoleResponse::from(role)))
}

// POST /api/roles - Create new role
#[instrument(skip(state, payload))]
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<RolePayload>,
) -> Result<(StatusCode, Json<RoleResponse>), AppError> {
    let new_role = validation::validate_role(&payload)?;

    let role = sqlx::query_as::<_, Role>(
        "INSERT INTO roles (name) VALUES ($1) RETURNING id, name",
    )
    .bind(&new_role.name)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| {
        error!(?e, "Failed to create role");
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

// PUT /api/roles/:id - Replace role
#[instrument(skip(state, payload), fields(id))]
pub async fn update_role(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<RolePayload>,
) -> Result<Json<RoleResponse>, AppError> {
    let new_role = validation::validate_role(&payload)?;

    let role = sqlx::query_as::<_, Role>(
        "UPDATE roles SET name = $1 WHERE id = $2 RETURNING id, name",
    )
    .bind(&new_role.name)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Role not found"))?;

    Ok(Json(RoleResponse::from(role)))
}

// DELETE /api/roles/:id - Delete role
#[instrument(skip(state), fields(id))]
pub async fn delete_role(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = sqlx::query("DELETE FROM roles WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?;

    if deleted.is_none() {
        return Err(AppError::not_found("Role not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
