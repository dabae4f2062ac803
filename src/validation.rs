// src/validation.rs
//
// Field-rule validation for incoming payloads. Runs before any database
// access and has no side effects: a payload either comes back as a fully
// validated record, or as a single error naming the first failing field.
//
// Payload fields are all Option so that missing JSON keys reach these checks
// instead of dying in deserialization; that is what lets a request without an
// email produce "email is required" rather than a generic decode error.

use serde_json::Value;

use crate::dtos::role::{NewRole, RolePayload};
use crate::dtos::user::{NewUser, UserPayload};
use crate::error::AppError;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 32;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 128;
pub const ROLE_NAME_MIN: usize = 2;
pub const ROLE_NAME_MAX: usize = 32;

/// Validate a user payload, fields checked in declaration order.
pub fn validate_user(payload: &UserPayload) -> Result<NewUser, AppError> {
    let username = require_text("username", payload.username.as_deref(), USERNAME_MIN, USERNAME_MAX)?;
    let password = require_password("password", payload.password.as_deref())?;
    let email = require_email("email", payload.email.as_deref())?;
    let role = require_integer("role", payload.role.as_ref())?;
    Ok(NewUser {
        username,
        password,
        email,
        role,
    })
}

/// Validate a role payload.
pub fn validate_role(payload: &RolePayload) -> Result<NewRole, AppError> {
    let name = require_text("name", payload.name.as_deref(), ROLE_NAME_MIN, ROLE_NAME_MAX)?;
    Ok(NewRole { name })
}

fn require_text(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<String, AppError> {
    let value = value.map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    Ok(value.to_string())
}

// Passwords are deliberately not trimmed; leading or trailing spaces are
// part of the secret.
fn require_password(field: &str, value: Option<&str>) -> Result<String, AppError> {
    let value = value.unwrap_or("");
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    let len = value.chars().count();
    if len < PASSWORD_MIN || len > PASSWORD_MAX {
        return Err(AppError::validation(format!(
            "{field} must be between {PASSWORD_MIN} and {PASSWORD_MAX} characters"
        )));
    }
    Ok(value.to_string())
}

fn require_email(field: &str, value: Option<&str>) -> Result<String, AppError> {
    let value = value.map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    let shaped = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    };
    if !shaped {
        return Err(AppError::validation(format!(
            "{field} must be a valid email address"
        )));
    }
    Ok(value.to_string())
}

// Accepts a raw JSON value so that a string or fractional role reports
// "must be an integer" instead of failing in the deserializer.
fn require_integer(field: &str, value: Option<&Value>) -> Result<i32, AppError> {
    value
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| AppError::validation(format!("{field} must be an integer")))
}
