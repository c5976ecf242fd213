use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{DomainError, NewUser};
use crate::infrastructure::auth::{create_jwt, hash_password, verify_password, AuthUser};
use crate::infrastructure::AppState;
use crate::services::profile_service::validate_email;

const MIN_PASSWORD_LEN: usize = 4;

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    username: String,
    password: String,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let username = payload.username.trim().to_string();
    if username.is_empty() {
        return Err(DomainError::Validation("Username is required".to_string()));
    }
    if payload.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let email = match payload.email.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(validate_email(raw)?),
        _ => None,
    };
    let phone_number = payload
        .phone_number
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    let password_hash = hash_password(&payload.password).map_err(DomainError::Internal)?;
    let user = state
        .user_repo
        .create(NewUser {
            username,
            password_hash,
            phone_number,
            email,
        })
        .await?;

    tracing::info!("Registered user: {}", user.username);
    let token = create_jwt(user.id, &user.username).map_err(DomainError::Internal)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "token": token, "user": user })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, DomainError> {
    tracing::info!("Login attempt for user: {}", payload.username);

    let Some(user) = state
        .user_repo
        .find_by_username(payload.username.trim())
        .await?
    else {
        tracing::warn!("User not found: {}", payload.username);
        return Err(DomainError::Unauthorized);
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {
            tracing::info!("Password verified for user: {}", user.username);
            let token = create_jwt(user.id, &user.username).map_err(DomainError::Internal)?;
            Ok(Json(json!({ "token": token, "user": user })))
        }
        _ => {
            tracing::warn!("Password verification failed for user: {}", user.username);
            Err(DomainError::Unauthorized)
        }
    }
}

/// Tokens are stateless; the client discards its copy.
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, DomainError> {
    let user = state
        .user_repo
        .find_by_id(auth.id)
        .await?
        .ok_or(DomainError::Unauthorized)?;
    Ok(Json(user))
}
