// src/handlers/user.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bcrypt::{hash, DEFAULT_COST};
use tracing::{error, instrument};

use crate::dtos::user::{UserPayload, UserResponse};
use crate::error::AppError;
use crate::models::user::User;
use crate::state::AppState;
use crate::validation;

// GET /api/users - List all users
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, email, role FROM users ORDER BY id",
    )
    .fetch_all(&state.db_pool)
    .await
    .map_err(|e| {
        error!(?e, "Failed to fetch users");
        AppError::from(e)
    })?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// GET /api/users/:id - Get single user
#[instrument(skip(state), fields(id))]
pub async fn get_user(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, email, role FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}

// POST /api/users - Create new user
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let new_user = validation::validate_user(&payload)?;
    let password_hash = hash(&new_user.password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Hash error: {e}")))?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash, email, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id, username, password_hash, email, role",
    )
    .bind(&new_user.username)
    .bind(&password_hash)
    .bind(&new_user.email)
    .bind(new_user.role)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| {
        error!(?e, "Failed to create user");
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

// PUT /api/users/:id - Replace user (no partial update)
#[instrument(skip(state, payload), fields(id))]
pub async fn update_user(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserResponse>, AppError> {
    let new_user = validation::validate_user(&payload)?;
    let password_hash = hash(&new_user.password, DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Hash error: {e}")))?;

    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET username = $1, password_hash = $2, email = $3, role = $4
         WHERE id = $5
         RETURNING id, username, password_hash, email, role",
    )
    .bind(&new_user.username)
    .bind(&password_hash)
    .bind(&new_user.email)
    .bind(new_user.role)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(UserResponse::from(user)))
}

// DELETE /api/users/:id - Delete user
#[instrument(skip(state), fields(id))]
pub async fn delete_user(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = sqlx::query("DELETE FROM users WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(&state.db_pool)
        .await?;

    if deleted.is_none() {
        return Err(AppError::not_found("User not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
