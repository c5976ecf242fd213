use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::infrastructure::auth::AuthUser;
use crate::services::profile_service;

#[derive(Debug, Deserialize)]
pub struct UpdateEmailRequest {
    #[serde(default)]
    pub email: String,
}

/// GET /api/profile - account and purchase history, newest first
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, DomainError> {
    let profile =
        profile_service::profile(state.user_repo.as_ref(), state.sale_repo.as_ref(), &user)
            .await?;
    Ok(Json(profile))
}

/// POST /api/profile - update the contact email
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UpdateEmailRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let updated = profile_service::update_email(state.user_repo.as_ref(), &user, &req.email).await?;
    Ok(Json(json!({
        "success": true,
        "user": updated
    })))
}
